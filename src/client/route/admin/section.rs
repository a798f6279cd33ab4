//! The admin navigation allow-list.
//!
//! Every admin view is a member of this enum; dispatch from route to page
//! component is checked at compile time by the router, and anything
//! outside the list resolves to the dashboard default.

use crate::client::router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    Categories,
    Destinations,
    Services,
    Events,
    Banners,
    Users,
    Settings,
}

impl AdminSection {
    pub const ALL: [AdminSection; 8] = [
        AdminSection::Dashboard,
        AdminSection::Categories,
        AdminSection::Destinations,
        AdminSection::Services,
        AdminSection::Events,
        AdminSection::Banners,
        AdminSection::Users,
        AdminSection::Settings,
    ];

    /// Parses an admin path segment against the allow-list. The empty
    /// segment is the dashboard (`/admin/`).
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "" | "dashboard" => Some(Self::Dashboard),
            "categories" => Some(Self::Categories),
            "destinations" => Some(Self::Destinations),
            "services" => Some(Self::Services),
            "events" => Some(Self::Events),
            "banners" => Some(Self::Banners),
            "users" => Some(Self::Users),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }

    /// Resolves a segment with the dashboard fallback: anything not in the
    /// allow-list lands on the default section.
    pub fn resolve(segment: &str) -> Self {
        Self::parse(segment).unwrap_or(Self::Dashboard)
    }

    /// The section a route belongs to; None for public routes.
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::AdminDashboard {} => Some(Self::Dashboard),
            Route::AdminCategories {} => Some(Self::Categories),
            Route::AdminDestinations {} => Some(Self::Destinations),
            Route::AdminServices {} => Some(Self::Services),
            Route::AdminEvents {} => Some(Self::Events),
            Route::AdminBanners {} => Some(Self::Banners),
            Route::AdminUsers {} => Some(Self::Users),
            Route::AdminSettings {} => Some(Self::Settings),
            _ => None,
        }
    }

    pub fn route(self) -> Route {
        match self {
            Self::Dashboard => Route::AdminDashboard {},
            Self::Categories => Route::AdminCategories {},
            Self::Destinations => Route::AdminDestinations {},
            Self::Services => Route::AdminServices {},
            Self::Events => Route::AdminEvents {},
            Self::Banners => Route::AdminBanners {},
            Self::Users => Route::AdminUsers {},
            Self::Settings => Route::AdminSettings {},
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Categories => "Categories",
            Self::Destinations => "Destinations",
            Self::Services => "Services",
            Self::Events => "Events",
            Self::Banners => "Banners",
            Self::Users => "Users",
            Self::Settings => "Settings",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unknown_segments_resolve_to_the_dashboard() {
        assert_eq!(AdminSection::resolve("unknown-route"), AdminSection::Dashboard);
        assert_eq!(AdminSection::resolve("Dashboard"), AdminSection::Dashboard);
        assert_eq!(AdminSection::resolve(""), AdminSection::Dashboard);
    }

    #[test]
    fn every_section_parses_its_own_segment() {
        assert_eq!(AdminSection::parse("settings"), Some(AdminSection::Settings));
        assert_eq!(AdminSection::parse("categories"), Some(AdminSection::Categories));
        assert_eq!(AdminSection::parse("bogus"), None);
    }

    #[test]
    fn routes_round_trip_to_their_section() {
        for section in AdminSection::ALL {
            assert_eq!(AdminSection::from_route(&section.route()), Some(section));
        }
    }

    #[test]
    fn public_routes_have_no_section() {
        assert_eq!(AdminSection::from_route(&Route::Home {}), None);
    }
}
