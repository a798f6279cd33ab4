use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaCalendar, FaGauge, FaGear, FaImage, FaMap, FaBellConcierge, FaTag, FaUsers,
    },
    Icon,
};

use crate::client::{route::admin::AdminSection, router::Route};

/// Admin navigation. Each link compares its own section against the one
/// resolved from the current route to claim the active style.
#[component]
pub fn Sidebar() -> Element {
    let route = use_route::<Route>();
    let active = AdminSection::from_route(&route);

    rsx!(aside {
        class: "w-56 min-h-screen pt-24 bg-base-200",
        ul {
            class: "menu w-full",
            for section in AdminSection::ALL {
                li {
                    Link {
                        to: section.route(),
                        class: if active == Some(section) { "active" } else { "" },
                        SectionIcon { section }
                        "{section.label()}"
                    }
                }
            }
        }
    })
}

#[component]
fn SectionIcon(section: AdminSection) -> Element {
    match section {
        AdminSection::Dashboard => rsx!(Icon { width: 18, height: 18, icon: FaGauge }),
        AdminSection::Categories => rsx!(Icon { width: 18, height: 18, icon: FaTag }),
        AdminSection::Destinations => rsx!(Icon { width: 18, height: 18, icon: FaMap }),
        AdminSection::Services => rsx!(Icon { width: 18, height: 18, icon: FaBellConcierge }),
        AdminSection::Events => rsx!(Icon { width: 18, height: 18, icon: FaCalendar }),
        AdminSection::Banners => rsx!(Icon { width: 18, height: 18, icon: FaImage }),
        AdminSection::Users => rsx!(Icon { width: 18, height: 18, icon: FaUsers }),
        AdminSection::Settings => rsx!(Icon { width: 18, height: 18, icon: FaGear }),
    }
}
