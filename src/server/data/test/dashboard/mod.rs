use crate::server::data::dashboard::DashboardRepository;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod aggregates;

/// Appends a visit row directly; only valid when the analytics tables were
/// added to the test schema.
async fn record_visit(
    db: &DatabaseConnection,
    destination_id: i32,
    days_ago: i64,
) -> Result<(), DbErr> {
    entity::visit::ActiveModel {
        destination_id: ActiveValue::Set(destination_id),
        visited_at: ActiveValue::Set(Utc::now() - Duration::days(days_ago)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}

async fn record_usage(db: &DatabaseConnection, service_id: i32) -> Result<(), DbErr> {
    entity::service_usage::ActiveModel {
        service_id: ActiveValue::Set(service_id),
        used_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}
