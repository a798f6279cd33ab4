use dioxus::prelude::*;

use crate::model::dashboard::SeriesPointDto;

/// Horizontal bar list for one dashboard series. Bars scale against the
/// series maximum; an all-zero series renders labels with empty tracks.
#[component]
pub fn BarChart(title: String, series: Vec<SeriesPointDto>) -> Element {
    let max = series.iter().map(|point| point.value).max().unwrap_or(0);

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title text-base", "{title}" }
                if series.is_empty() {
                    p { class: "text-sm opacity-70", "No data" }
                }
                for point in series {
                    div {
                        class: "flex items-center gap-2 text-sm",
                        span { class: "w-32 truncate", "{point.label}" }
                        div {
                            class: "flex-1 bg-base-300 rounded h-3",
                            div {
                                class: "bg-primary rounded h-3",
                                style: format!(
                                    "width: {}%",
                                    if max > 0 { point.value * 100 / max } else { 0 }
                                ),
                            }
                        }
                        span { class: "w-10 text-right", "{point.value}" }
                    }
                }
            }
        }
    )
}
