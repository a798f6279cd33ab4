use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

/// Full-page spinner shown while a route's data is loading.
#[component]
pub fn LoadingPage() -> Element {
    rsx!(Page {
        class: "flex items-center justify-center",
        span { class: "loading loading-spinner loading-lg" }
    })
}

/// Full-page error display.
#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(Page {
        class: "flex flex-col items-center justify-center gap-2",
        h1 { class: "text-4xl font-bold", "{status}" }
        p { class: "opacity-70", "{message}" }
    })
}
