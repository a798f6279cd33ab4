use super::*;

/// Tests the create → partial update → read round trip.
///
/// Only the description is patched; the name and image must keep their
/// stored values.
#[tokio::test]
async fn omitted_fields_stay_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let created = repo
        .create(CreateCategoryParams {
            name: "Mountains".to_string(),
            description: "Peaks".to_string(),
            image: Some("mountains.jpg".to_string()),
        })
        .await?;

    let updated = repo
        .update(UpdateCategoryParams {
            id: created.id,
            name: None,
            description: Some("Peaks and valleys".to_string()),
            image: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Mountains");
    assert_eq!(updated.description, "Peaks and valleys");
    assert_eq!(updated.image.as_deref(), Some("mountains.jpg"));

    let read_back = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(read_back, updated);

    Ok(())
}

/// Tests that an explicit clearing patch nulls the image while a value
/// patch overwrites it.
#[tokio::test]
async fn image_clears_and_overwrites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let created = repo
        .create(CreateCategoryParams {
            name: "Lakes".to_string(),
            description: "Water".to_string(),
            image: Some("lakes.jpg".to_string()),
        })
        .await?;

    // Explicit clear.
    let cleared = repo
        .update(UpdateCategoryParams {
            id: created.id,
            name: None,
            description: None,
            image: Some(None),
        })
        .await?
        .unwrap();
    assert_eq!(cleared.image, None);

    // New value.
    let overwritten = repo
        .update(UpdateCategoryParams {
            id: created.id,
            name: None,
            description: None,
            image: Some(Some("lakes-v2.jpg".to_string())),
        })
        .await?
        .unwrap();
    assert_eq!(overwritten.image.as_deref(), Some("lakes-v2.jpg"));

    Ok(())
}

/// Tests updating a missing row.
///
/// Expected: Ok(None), no error.
#[tokio::test]
async fn missing_row_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo
        .update(UpdateCategoryParams {
            id: 4242,
            name: Some("Ghost".to_string()),
            description: None,
            image: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
