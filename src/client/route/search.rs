use dioxus::prelude::*;

use crate::{
    client::{component::Page, constant::SITE_NAME, route::DestinationCard},
    model::destination::DestinationDto,
};

#[component]
pub fn Search(q: String) -> Element {
    let mut query = use_signal(|| q);
    let mut results = use_signal(Vec::<DestinationDto>::new);
    let mut searched = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        use crate::client::api::destination::get_destinations;

        let future = use_resource(move || {
            let q = query();
            async move { get_destinations(None, None, Some(&q)).await }
        });

        use_effect(move || {
            if let Some(Ok(data)) = future.read_unchecked().as_ref() {
                results.set(data.clone());
                searched.set(true);
            }
        });
    }

    rsx!(
        Title { "Search | {SITE_NAME}" }
        Page {
            div {
                class: "max-w-6xl mx-auto space-y-6",
                input {
                    class: "input input-bordered w-full max-w-lg",
                    r#type: "search",
                    placeholder: "Search destinations",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                if searched() && results.read().is_empty() {
                    p { class: "opacity-70", "No destinations match the search." }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    for destination in results() {
                        DestinationCard { destination }
                    }
                }
            }
        }
    )
}
