use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates an active banner.
pub async fn create_banner(db: &DatabaseConnection) -> Result<entity::banner::Model, DbErr> {
    let id = next_id();

    entity::banner::ActiveModel {
        image: ActiveValue::Set(format!("banner-{id}.jpg")),
        title: ActiveValue::Set(format!("Banner {id}")),
        sort_order: ActiveValue::Set(id as i32),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
