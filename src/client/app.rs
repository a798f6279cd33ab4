use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route, store::session::SessionState};

#[cfg(feature = "web")]
use crate::client::api::auth::get_session_user;

#[component]
pub fn App() -> Element {
    let mut session = use_context_provider(|| Signal::new(SessionState::default()));

    // Resolve the session once on first load; pages react through context.
    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async { get_session_user().await });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                let user = result.as_ref().ok().cloned().flatten();
                session.set(SessionState {
                    user,
                    fetched: true,
                });
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Discover destinations, services and events"
        }
        document::Link { rel: "stylesheet", href: "/assets/tailwind.css" }
        Router::<Route> {}
    }
}
