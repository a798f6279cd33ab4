//! Shared helpers for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests, so factory-created rows
/// never collide on unique columns.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category and a destination inside it. The common starting
/// point for destination-centric tests.
pub async fn create_destination_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::destination::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let destination = crate::factory::destination::create_destination(db, category.id).await?;

    Ok((category, destination))
}

/// Creates a service type and a service of that type.
pub async fn create_service_with_type(
    db: &DatabaseConnection,
) -> Result<(entity::service_type::Model, entity::service::Model), DbErr> {
    let service_type = crate::factory::service::create_service_type(db).await?;
    let service = crate::factory::service::create_service(db, service_type.id).await?;

    Ok((service_type, service))
}

/// Creates an event with its full dependency chain (category, destination).
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::category::Model,
        entity::destination::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let (category, destination) = create_destination_with_category(db).await?;
    let event = crate::factory::event::create_event(db, destination.id).await?;

    Ok((category, destination, event))
}
