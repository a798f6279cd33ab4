use super::*;

/// Tests that a created favorite is retrievable by user (with the joined
/// destination) and by destination.
#[tokio::test]
async fn favorite_retrievable_from_both_directions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, destination) = factory::helpers::create_destination_with_category(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo.create(user.id, destination.id).await?;

    let by_user = repo.get_by_user(user.id).await?;
    assert_eq!(by_user.len(), 1);
    assert_eq!(by_user[0].0.id, favorite.id);
    assert_eq!(by_user[0].1.as_ref().unwrap().slug, destination.slug);

    let by_destination = repo.get_by_destination(destination.id).await?;
    assert_eq!(by_destination.len(), 1);
    assert_eq!(by_destination[0].user_id, user.id);

    Ok(())
}

/// Tests pair detection before and after creation, and after deletion.
#[tokio::test]
async fn pair_exists_tracks_the_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, destination) = factory::helpers::create_destination_with_category(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);

    assert!(!repo.pair_exists(user.id, destination.id).await?);
    let favorite = repo.create(user.id, destination.id).await?;
    assert!(repo.pair_exists(user.id, destination.id).await?);

    repo.delete(favorite.id).await?;
    assert!(!repo.pair_exists(user.id, destination.id).await?);

    Ok(())
}
