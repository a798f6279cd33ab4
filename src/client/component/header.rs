use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaCompass, Icon};

use crate::client::{constant::SITE_NAME, router::Route, store::session::SessionState};

#[component]
pub fn Header() -> Element {
    let session = use_context::<Signal<SessionState>>();

    let logged_in = session.read().is_logged_in();
    let is_admin = session.read().is_admin();
    let fetched = session.read().fetched;

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaCompass
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            Link {
                to: Route::Search { q: String::new() },
                class: "btn btn-ghost",
                "Search"
            }
            if fetched && logged_in {
                if is_admin {
                    Link {
                        to: Route::AdminDashboard {},
                        class: "btn btn-outline",
                        "Admin"
                    }
                }
                LogoutButton {}
            } else if fetched {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    "Login"
                }
            }
        }
    })
}

#[component]
fn LogoutButton() -> Element {
    let mut session = use_context::<Signal<SessionState>>();
    let mut logging_out = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        use crate::client::api::auth::logout;

        let future = use_resource(move || async move {
            if logging_out() {
                Some(logout().await)
            } else {
                None
            }
        });

        use_effect(move || {
            if let Some(Some(_)) = future.read_unchecked().as_ref() {
                session.set(SessionState {
                    user: None,
                    fetched: true,
                });
                logging_out.set(false);
            }
        });
    }

    rsx!(button {
        class: "btn btn-outline",
        onclick: move |_| logging_out.set(true),
        "Logout"
    })
}
