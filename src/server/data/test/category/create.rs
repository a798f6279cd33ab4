use super::*;

/// Tests creating a category with all fields set.
///
/// Expected: Ok with the stored row carrying the supplied values.
#[tokio::test]
async fn creates_category_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let created = repo
        .create(CreateCategoryParams {
            name: "Beaches".to_string(),
            description: "Sun and sand".to_string(),
            image: Some("beaches.jpg".to_string()),
        })
        .await?;

    assert_eq!(created.name, "Beaches");
    assert_eq!(created.description, "Sun and sand");
    assert_eq!(created.image.as_deref(), Some("beaches.jpg"));

    Ok(())
}

/// Tests that `name_exists` sees existing rows and respects the exclusion.
///
/// Expected: true for a sibling with the name, false when that row itself
/// is excluded.
#[tokio::test]
async fn name_exists_respects_exclusion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.name_exists(&existing.name, None).await?);
    assert!(!repo.name_exists(&existing.name, Some(existing.id)).await?);
    assert!(!repo.name_exists("Unused name", None).await?);

    Ok(())
}
