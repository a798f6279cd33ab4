use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a category with a unique name.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    let id = next_id();

    entity::category::ActiveModel {
        name: ActiveValue::Set(format!("Category {id}")),
        description: ActiveValue::Set(format!("Description for category {id}")),
        image: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
