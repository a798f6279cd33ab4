use dioxus::prelude::*;

use crate::client::{
    component::{HtmlFragment, Page},
    constant::SITE_NAME,
};

/// Static placeholder section: renders a server-side fragment and performs
/// no API calls.
#[component]
pub fn AdminSettings() -> Element {
    rsx!(
        Title { "Settings | {SITE_NAME}" }
        Page {
            div {
                class: "max-w-3xl mx-auto space-y-4",
                h1 { class: "text-2xl font-bold", "Settings" }
                HtmlFragment { path: "/fragments/settings.html" }
            }
        }
    )
}
