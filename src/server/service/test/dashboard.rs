use super::*;

use crate::server::{capabilities::Capabilities, service::dashboard::DashboardService};

/// Tests that every one of the eleven fields is present and the optional
/// series are zero-filled from existing rows when the analytics tables are
/// absent.
#[tokio::test]
async fn absent_analytics_tables_degrade_to_zero_series() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, destination) = factory::helpers::create_destination_with_category(db)
        .await
        .unwrap();
    let (_, service_row) = factory::helpers::create_service_with_type(db).await.unwrap();
    factory::event::create_event(db, destination.id).await.unwrap();
    factory::user::create_user(db).await.unwrap();

    let stats = DashboardService::new(db, Capabilities::none())
        .stats()
        .await
        .unwrap();

    assert_eq!(stats.categories, 1);
    assert_eq!(stats.destinations, 1);
    assert_eq!(stats.services, 1);
    assert_eq!(stats.events, 1);
    assert_eq!(stats.users, 1);

    // Real series from migrated tables.
    assert_eq!(stats.destinations_per_category.len(), 1);
    assert_eq!(stats.destinations_per_category[0].label, category.name);
    assert_eq!(stats.destinations_per_category[0].value, 1);
    assert_eq!(stats.users_by_role.len(), 2);
    assert_eq!(stats.monthly_user_growth.len(), 1);

    // Degraded series: one zero point per existing row / day label.
    assert_eq!(stats.recent_activity.len(), 7);
    assert!(stats.recent_activity.iter().all(|point| point.value == 0));

    assert_eq!(stats.category_visits.len(), 1);
    assert_eq!(stats.category_visits[0].label, category.name);
    assert_eq!(stats.category_visits[0].value, 0);

    assert_eq!(stats.service_usage.len(), 1);
    assert_eq!(stats.service_usage[0].label, service_row.name);
    assert_eq!(stats.service_usage[0].value, 0);
}

/// Tests that present analytics tables produce real visit/usage numbers.
#[tokio::test]
async fn present_analytics_tables_produce_real_series() {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, destination) = factory::helpers::create_destination_with_category(db)
        .await
        .unwrap();

    crate::server::data::destination::DestinationRepository::new(db)
        .record_visit(destination.id)
        .await
        .unwrap();

    let stats = DashboardService::new(db, Capabilities::full())
        .stats()
        .await
        .unwrap();

    let today_total: i64 = stats.recent_activity.iter().map(|point| point.value).sum();
    assert_eq!(today_total, 1);

    assert_eq!(stats.category_visits.len(), 1);
    assert_eq!(stats.category_visits[0].label, category.name);
    assert_eq!(stats.category_visits[0].value, 1);
}

/// Tests the empty-database shape: all fields present, all series sized by
/// what exists (nothing).
#[tokio::test]
async fn empty_database_still_carries_every_field() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = DashboardService::new(db, Capabilities::none())
        .stats()
        .await
        .unwrap();

    assert_eq!(stats.categories, 0);
    assert_eq!(stats.users, 0);
    assert!(stats.destinations_per_category.is_empty());
    assert_eq!(stats.recent_activity.len(), 7);
    assert_eq!(stats.users_by_role.len(), 2);
    assert!(stats.monthly_user_growth.is_empty());
    assert!(stats.category_visits.is_empty());
    assert!(stats.service_usage.is_empty());
}
