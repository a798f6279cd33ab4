use dioxus::prelude::*;

use crate::{
    client::{
        component::{BarChart, ErrorPage, LoadingPage, Page, StatCard},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::dashboard::DashboardStatsDto,
};

#[component]
pub fn AdminDashboard() -> Element {
    let stats = use_signal(|| None::<DashboardStatsDto>);
    let error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        use crate::client::api::dashboard::get_dashboard_stats;

        let mut stats = stats;
        let mut error = error;
        let future = use_resource(|| async { get_dashboard_stats().await });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        stats.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.clone())),
                }
            }
        });
    }

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        if let Some(stats) = stats() {
            Page {
                div {
                    class: "max-w-6xl mx-auto space-y-6",
                    h1 { class: "text-2xl font-bold", "Dashboard" }

                    div {
                        class: "grid grid-cols-2 md:grid-cols-5 gap-4",
                        StatCard { label: "Categories", value: stats.categories }
                        StatCard { label: "Destinations", value: stats.destinations }
                        StatCard { label: "Services", value: stats.services }
                        StatCard { label: "Events", value: stats.events }
                        StatCard { label: "Users", value: stats.users }
                    }

                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        BarChart {
                            title: "Destinations per category",
                            series: stats.destinations_per_category.clone()
                        }
                        BarChart {
                            title: "Recent activity (7 days)",
                            series: stats.recent_activity.clone()
                        }
                        BarChart {
                            title: "Users by role",
                            series: stats.users_by_role.clone()
                        }
                        BarChart {
                            title: "Monthly user growth",
                            series: stats.monthly_user_growth.clone()
                        }
                        BarChart {
                            title: "Category visits",
                            series: stats.category_visits.clone()
                        }
                        BarChart {
                            title: "Service usage",
                            series: stats.service_usage.clone()
                        }
                    }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}
