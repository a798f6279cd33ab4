use super::*;

/// Tests that the category, featured, and substring filters combine.
#[tokio::test]
async fn filters_combine() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let beaches = factory::category::create_category(db).await?;
    let mountains = factory::category::create_category(db).await?;

    let playa = DestinationFactory::new(db, beaches.id)
        .name("Playa Grande")
        .slug("playa-grande")
        .featured(true)
        .build()
        .await?;
    DestinationFactory::new(db, beaches.id)
        .name("Bahía Quieta")
        .slug("baha-quieta")
        .build()
        .await?;
    DestinationFactory::new(db, mountains.id)
        .name("Pico Alto")
        .slug("pico-alto")
        .featured(true)
        .build()
        .await?;

    let repo = DestinationRepository::new(db);

    let by_category = repo
        .get_all(DestinationFilter {
            category_id: Some(beaches.id),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_category.len(), 2);

    let featured_beaches = repo
        .get_all(DestinationFilter {
            category_id: Some(beaches.id),
            featured: Some(true),
            q: None,
        })
        .await?;
    assert_eq!(featured_beaches.len(), 1);
    assert_eq!(featured_beaches[0].0.id, playa.id);

    let by_text = repo
        .get_all(DestinationFilter {
            q: Some("Playa".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_text.len(), 1);
    assert_eq!(by_text[0].0.id, playa.id);

    Ok(())
}

/// Tests that the substring filter also matches the description column.
#[tokio::test]
async fn text_filter_matches_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let destination = factory::destination::create_destination(db, category.id).await?;

    let repo = DestinationRepository::new(db);

    // Factory descriptions read "Long description of {name}".
    let matched = repo
        .get_all(DestinationFilter {
            q: Some(format!("Long description of {}", destination.name)),
            ..Default::default()
        })
        .await?;
    assert_eq!(matched.len(), 1);

    Ok(())
}

/// Tests the joined category on lookups.
#[tokio::test]
async fn lookups_carry_the_joined_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, destination) = factory::helpers::create_destination_with_category(db).await?;

    let repo = DestinationRepository::new(db);

    let (_, joined) = repo.get_by_id(destination.id).await?.unwrap();
    assert_eq!(joined.unwrap().name, category.name);

    let (by_slug, _) = repo.get_by_slug(&destination.slug).await?.unwrap();
    assert_eq!(by_slug.id, destination.id);

    assert!(repo.slug_exists(&destination.slug).await?);
    assert!(!repo.slug_exists("missing-slug").await?);

    Ok(())
}
