use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a service type with a unique name.
pub async fn create_service_type(
    db: &DatabaseConnection,
) -> Result<entity::service_type::Model, DbErr> {
    let id = next_id();

    entity::service_type::ActiveModel {
        name: ActiveValue::Set(format!("Service Type {id}")),
        icon: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a service of the given type.
pub async fn create_service(
    db: &DatabaseConnection,
    service_type_id: i32,
) -> Result<entity::service::Model, DbErr> {
    let id = next_id();

    entity::service::ActiveModel {
        name: ActiveValue::Set(format!("Service {id}")),
        service_type_id: ActiveValue::Set(service_type_id),
        location: ActiveValue::Set(format!("Location {id}")),
        description: ActiveValue::Set(format!("Description for service {id}")),
        price_min: ActiveValue::Set(Some(10.0)),
        price_max: ActiveValue::Set(Some(100.0)),
        image: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a service to a destination.
pub async fn link_service(
    db: &DatabaseConnection,
    destination_id: i32,
    service_id: i32,
) -> Result<entity::destination_service::Model, DbErr> {
    entity::destination_service::ActiveModel {
        destination_id: ActiveValue::Set(destination_id),
        service_id: ActiveValue::Set(service_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
