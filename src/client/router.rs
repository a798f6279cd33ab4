use dioxus::prelude::*;

use crate::client::component::{AdminLayout, Layout};
use crate::client::route::{
    admin::{
        AdminBanners, AdminCategories, AdminDashboard, AdminDestinations, AdminEvents,
        AdminServices, AdminSettings, AdminUsers,
    },
    DestinationDetail, Home, Login, NotFound, Search,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/search?:q")]
    Search { q: String },

    #[route("/destinations/:slug")]
    DestinationDetail { slug: String },

    #[route("/login")]
    Login {},
    #[end_layout]

    #[layout(AdminLayout)]
    #[nest("/admin")]
        #[route("/")]
        AdminDashboard {},

        #[route("/categories")]
        AdminCategories {},

        #[route("/destinations")]
        AdminDestinations {},

        #[route("/services")]
        AdminServices {},

        #[route("/events")]
        AdminEvents {},

        #[route("/banners")]
        AdminBanners {},

        #[route("/users")]
        AdminUsers {},

        #[route("/settings")]
        AdminSettings {},
    #[end_nest]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
