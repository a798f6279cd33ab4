pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_category_table;
mod m20260110_000002_create_service_type_table;
mod m20260110_000003_create_user_table;
mod m20260110_000004_create_destination_table;
mod m20260110_000005_create_service_table;
mod m20260110_000006_create_destination_service_table;
mod m20260111_000007_create_event_table;
mod m20260111_000008_create_event_follow_table;
mod m20260111_000009_create_favorite_table;
mod m20260111_000010_create_gallery_image_table;
mod m20260111_000011_create_banner_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_category_table::Migration),
            Box::new(m20260110_000002_create_service_type_table::Migration),
            Box::new(m20260110_000003_create_user_table::Migration),
            Box::new(m20260110_000004_create_destination_table::Migration),
            Box::new(m20260110_000005_create_service_table::Migration),
            Box::new(m20260110_000006_create_destination_service_table::Migration),
            Box::new(m20260111_000007_create_event_table::Migration),
            Box::new(m20260111_000008_create_event_follow_table::Migration),
            Box::new(m20260111_000009_create_favorite_table::Migration),
            Box::new(m20260111_000010_create_gallery_image_table::Migration),
            Box::new(m20260111_000011_create_banner_table::Migration),
        ]
    }
}
