use dioxus::prelude::*;

#[component]
pub fn StatCard(label: String, value: u64) -> Element {
    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body items-center text-center",
                p { class: "text-3xl font-bold", "{value}" }
                p { class: "text-sm opacity-70", "{label}" }
            }
        }
    )
}
