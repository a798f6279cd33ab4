use super::*;

/// Tests that deactivation clears the flag without removing the row, and
/// that the active filter hides it.
#[tokio::test]
async fn deactivate_keeps_the_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Banner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let banner = factory::banner::create_banner(db).await?;

    let repo = BannerRepository::new(db);
    let deactivated = repo.deactivate(banner.id).await?.unwrap();
    assert!(!deactivated.active);

    // Row still present without the filter, hidden with active=true.
    assert_eq!(repo.get_all(None).await?.len(), 1);
    assert!(repo.get_all(Some(true)).await?.is_empty());

    // Reactivation through a normal update.
    let reactivated = repo
        .update(UpdateBannerParams {
            id: banner.id,
            image: None,
            title: None,
            sort_order: None,
            active: Some(true),
        })
        .await?
        .unwrap();
    assert!(reactivated.active);

    Ok(())
}

/// Tests display ordering by sort_order.
#[tokio::test]
async fn listing_orders_by_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Banner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::banner::create_banner(db).await?;
    let second = factory::banner::create_banner(db).await?;

    let repo = BannerRepository::new(db);

    // Swap display order and confirm the listing follows it.
    repo.update(UpdateBannerParams {
        id: first.id,
        image: None,
        title: None,
        sort_order: Some(second.sort_order + 1),
        active: None,
    })
    .await?;

    let listed = repo.get_all(None).await?;
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);

    Ok(())
}
