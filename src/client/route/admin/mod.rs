mod banners;
mod categories;
mod dashboard;
mod destinations;
mod events;
mod section;
mod services;
mod settings;
mod users;

pub use banners::AdminBanners;
pub use categories::AdminCategories;
pub use dashboard::AdminDashboard;
pub use destinations::AdminDestinations;
pub use events::AdminEvents;
pub use section::AdminSection;
pub use services::AdminServices;
pub use settings::AdminSettings;
pub use users::AdminUsers;
