use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

/// Catch-all. Unknown admin paths are redirected to the admin dashboard
/// with a `replace` navigation, so the dashboard renders exactly once and
/// the dead URL leaves no history entry. Everything else gets a 404 page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let under_admin = segments.first().map(String::as_str) == Some("admin");

    use_effect(move || {
        if under_admin {
            navigator.replace(Route::AdminDashboard {});
        }
    });

    if under_admin {
        return rsx!();
    }

    rsx!(Page {
        class: "flex flex-col items-center justify-center gap-4",
        h1 { class: "text-4xl font-bold", "404" }
        p { class: "opacity-70", "This page does not exist." }
        Link {
            to: Route::Home {},
            class: "btn btn-primary",
            "Back to the home page"
        }
    })
}
