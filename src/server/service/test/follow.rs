use super::*;

use crate::server::{
    data::{event::EventFollowRepository, favorite::FavoriteRepository},
    service::{event::EventFollowService, favorite::FavoriteService},
};

/// Tests that a favorite pair can be created once and only once, and that
/// the rejection leaves no second row behind.
#[tokio::test]
async fn duplicate_favorite_rejected_without_a_second_row() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, destination) = factory::helpers::create_destination_with_category(db)
        .await
        .unwrap();
    let user = factory::user::create_user(db).await.unwrap();

    let service = FavoriteService::new(db);

    service.create(user.id, destination.id).await.unwrap();

    let duplicate = service.create(user.id, destination.id).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let rows = FavoriteRepository::new(db).get_by_user(user.id).await.unwrap();
    assert_eq!(rows.len(), 1);
}

/// Tests favorite referential checks: both endpoints must exist.
#[tokio::test]
async fn favorite_requires_user_and_destination() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, destination) = factory::helpers::create_destination_with_category(db)
        .await
        .unwrap();
    let user = factory::user::create_user(db).await.unwrap();

    let service = FavoriteService::new(db);

    let no_user = service.create(4242, destination.id).await;
    assert!(matches!(no_user, Err(AppError::NotFound(_))));

    let no_destination = service.create(user.id, 4242).await;
    assert!(matches!(no_destination, Err(AppError::NotFound(_))));
}

/// Tests that duplicate event follows are rejected without a second row.
#[tokio::test]
async fn duplicate_follow_rejected_without_a_second_row() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_event_with_dependencies(db)
        .await
        .unwrap();
    let user = factory::user::create_user(db).await.unwrap();

    let service = EventFollowService::new(db);

    service.follow(user.id, event.id).await.unwrap();

    let duplicate = service.follow(user.id, event.id).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let rows = EventFollowRepository::new(db)
        .followers_of_event(event.id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

/// Tests follow referential checks: the event must exist.
#[tokio::test]
async fn follow_requires_the_event() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();

    let service = EventFollowService::new(db);
    let missing = service.follow(user.id, 4242).await;

    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

/// Tests unfollow of a missing row.
#[tokio::test]
async fn unfollow_missing_row_is_not_found() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventFollowService::new(db);
    let missing = service.unfollow(4242).await;

    assert!(matches!(missing, Err(AppError::NotFound(_))));
}
