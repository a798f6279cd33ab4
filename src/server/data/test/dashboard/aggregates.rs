use super::*;

/// Tests the scalar counts over a small fixture set.
#[tokio::test]
async fn counts_reflect_the_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, destination) = factory::helpers::create_destination_with_category(db).await?;
    factory::event::create_event(db, destination.id).await?;
    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let repo = DashboardRepository::new(db);
    assert_eq!(repo.count_categories().await?, 1);
    assert_eq!(repo.count_destinations().await?, 1);
    assert_eq!(repo.count_services().await?, 0);
    assert_eq!(repo.count_events().await?, 1);
    assert_eq!(repo.count_users().await?, 2);

    Ok(())
}

/// Tests the destinations-per-category group-by.
#[tokio::test]
async fn destination_counts_group_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let beaches = factory::category::create_category(db).await?;
    let mountains = factory::category::create_category(db).await?;
    factory::destination::create_destination(db, beaches.id).await?;
    factory::destination::create_destination(db, beaches.id).await?;
    factory::destination::create_destination(db, mountains.id).await?;

    let repo = DashboardRepository::new(db);
    let mut counts = repo.destination_counts_by_category().await?;
    counts.sort();

    let mut expected = vec![(beaches.id, 2), (mountains.id, 1)];
    expected.sort();
    assert_eq!(counts, expected);

    Ok(())
}

/// Tests the role group-by against mixed roles.
#[tokio::test]
async fn user_counts_group_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;
    test_utils::factory::user::UserFactory::new(db)
        .role(entity::user::Role::Admin)
        .build()
        .await?;

    let repo = DashboardRepository::new(db);
    let mut counts = repo.user_counts_by_role().await?;
    counts.sort();

    assert_eq!(
        counts,
        vec![("admin".to_string(), 1), ("user".to_string(), 2)]
    );

    Ok(())
}

/// Tests visit aggregation by day and by destination when the analytics
/// tables exist.
#[tokio::test]
async fn visit_counts_aggregate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, destination) = factory::helpers::create_destination_with_category(db).await?;
    record_visit(db, destination.id, 0).await?;
    record_visit(db, destination.id, 0).await?;
    record_visit(db, destination.id, 1).await?;
    // Outside a 7-day window.
    record_visit(db, destination.id, 30).await?;

    let repo = DashboardRepository::new(db);

    let since = Utc::now() - Duration::days(6);
    let by_day = repo.visit_counts_by_day(since).await?;
    let total_in_window: i64 = by_day.iter().map(|(_, count)| count).sum();
    assert_eq!(total_in_window, 3);

    let by_destination = repo.visit_counts_by_destination().await?;
    assert_eq!(by_destination, vec![(destination.id, 4)]);

    let pairs = repo.destination_category_pairs().await?;
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, destination.id);

    Ok(())
}

/// Tests service usage aggregation.
#[tokio::test]
async fn usage_counts_group_by_service() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, service) = factory::helpers::create_service_with_type(db).await?;
    record_usage(db, service.id).await?;
    record_usage(db, service.id).await?;

    let repo = DashboardRepository::new(db);
    assert_eq!(
        repo.usage_counts_by_service().await?,
        vec![(service.id, 2)]
    );

    Ok(())
}
