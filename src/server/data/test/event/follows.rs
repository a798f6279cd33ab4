use super::*;

/// Tests follow pair detection and retrieval from both directions.
#[tokio::test]
async fn follows_retrievable_by_user_and_by_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, destination) = factory::helpers::create_destination_with_category(db).await?;
    let event = factory::event::create_event(db, destination.id).await?;
    let other_event = factory::event::create_event(db, destination.id).await?;
    let user = factory::user::create_user(db).await?;

    let repo = EventFollowRepository::new(db);

    assert!(!repo.pair_exists(user.id, event.id).await?);
    repo.create(user.id, event.id).await?;
    assert!(repo.pair_exists(user.id, event.id).await?);
    assert!(!repo.pair_exists(user.id, other_event.id).await?);

    let followed = repo.followed_by_user(user.id).await?;
    assert_eq!(followed.len(), 1);
    assert_eq!(followed[0].0.id, event.id);
    assert_eq!(followed[0].1.as_ref().unwrap().id, destination.id);

    let followers = repo.followers_of_event(event.id).await?;
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0].user_id, user.id);

    Ok(())
}

/// Tests deleting a follow row.
#[tokio::test]
async fn delete_removes_the_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = EventFollowRepository::new(db);
    let follow = repo.create(user.id, event.id).await?;

    assert_eq!(repo.delete(follow.id).await?, 1);
    assert!(!repo.pair_exists(user.id, event.id).await?);
    assert!(repo.followed_by_user(user.id).await?.is_empty());

    Ok(())
}
