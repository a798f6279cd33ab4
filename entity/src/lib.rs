//! SeaORM entity models for the tourism portal database.
//!
//! One module per table. The `prelude` re-exports every `Entity` under its
//! table name for use in repositories, migrations and tests.

pub mod banner;
pub mod category;
pub mod destination;
pub mod destination_service;
pub mod event;
pub mod event_follow;
pub mod favorite;
pub mod gallery_image;
pub mod service;
pub mod service_type;
pub mod service_usage;
pub mod user;
pub mod visit;

pub mod prelude {
    pub use super::banner::Entity as Banner;
    pub use super::category::Entity as Category;
    pub use super::destination::Entity as Destination;
    pub use super::destination_service::Entity as DestinationService;
    pub use super::event::Entity as Event;
    pub use super::event_follow::Entity as EventFollow;
    pub use super::favorite::Entity as Favorite;
    pub use super::gallery_image::Entity as GalleryImage;
    pub use super::service::Entity as Service;
    pub use super::service_type::Entity as ServiceType;
    pub use super::service_usage::Entity as ServiceUsage;
    pub use super::user::Entity as User;
    pub use super::visit::Entity as Visit;
}
