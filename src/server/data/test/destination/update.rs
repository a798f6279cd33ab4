use super::*;

/// Tests that a patch leaves unsupplied destination fields alone and that
/// the slug column survives any patch.
#[tokio::test]
async fn patch_preserves_unsupplied_fields_and_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let destination = DestinationFactory::new(db, category.id)
        .name("Costa Verde")
        .slug("costa-verde")
        .main_image("costa.jpg")
        .build()
        .await?;

    let repo = DestinationRepository::new(db);
    let updated = repo
        .update(UpdateDestinationParams {
            id: destination.id,
            name: Some("Costa Verde Norte".to_string()),
            category_id: None,
            summary: None,
            description: None,
            main_image: None,
            hero_image: None,
            featured: Some(true),
            latitude: Some(9.98),
            longitude: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Costa Verde Norte");
    assert_eq!(updated.slug, "costa-verde");
    assert_eq!(updated.main_image.as_deref(), Some("costa.jpg"));
    assert!(updated.featured);
    assert_eq!(updated.latitude, Some(9.98));
    assert_eq!(updated.longitude, None);
    assert_eq!(updated.summary, destination.summary);

    Ok(())
}

/// Tests clearing both image fields with explicit nulls.
#[tokio::test]
async fn explicit_null_clears_images() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let destination = DestinationFactory::new(db, category.id)
        .main_image("keep-or-clear.jpg")
        .build()
        .await?;

    let repo = DestinationRepository::new(db);
    let updated = repo
        .update(UpdateDestinationParams {
            id: destination.id,
            name: None,
            category_id: None,
            summary: None,
            description: None,
            main_image: Some(None),
            hero_image: Some(None),
            featured: None,
            latitude: None,
            longitude: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.main_image, None);
    assert_eq!(updated.hero_image, None);

    Ok(())
}
