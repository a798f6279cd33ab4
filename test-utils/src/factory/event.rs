use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates an event at the given destination.
pub async fn create_event(
    db: &DatabaseConnection,
    destination_id: i32,
) -> Result<entity::event::Model, DbErr> {
    let id = next_id();

    entity::event::ActiveModel {
        destination_id: ActiveValue::Set(destination_id),
        title: ActiveValue::Set(format!("Event {id}")),
        description: ActiveValue::Set(format!("Description for event {id}")),
        date: ActiveValue::Set(
            NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid fixture date"),
        ),
        location: ActiveValue::Set(format!("Venue {id}")),
        image: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a follow row linking a user to an event.
pub async fn create_follow(
    db: &DatabaseConnection,
    user_id: i32,
    event_id: i32,
) -> Result<entity::event_follow::Model, DbErr> {
    entity::event_follow::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        event_id: ActiveValue::Set(event_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
