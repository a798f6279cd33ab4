use super::*;

/// Tests deleting an existing category.
///
/// Expected: one row affected and the row gone afterwards.
#[tokio::test]
async fn deletes_existing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let affected = repo.delete(category.id).await?;

    assert_eq!(affected, 1);
    assert!(repo.get_by_id(category.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing category.
///
/// Expected: zero rows affected.
#[tokio::test]
async fn deleting_missing_category_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let affected = repo.delete(4242).await?;

    assert_eq!(affected, 0);

    Ok(())
}
