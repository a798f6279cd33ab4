use super::*;

/// Tests linking services to a destination and reading them back with
/// their types.
#[tokio::test]
async fn linked_services_resolve_with_types() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, destination) = factory::helpers::create_destination_with_category(db).await?;
    let (service_type, service) = factory::helpers::create_service_with_type(db).await?;
    factory::service::link_service(db, destination.id, service.id).await?;

    let repo = DestinationRepository::new(db);
    let services = repo.services_for(destination.id).await?;

    assert_eq!(services.len(), 1);
    assert_eq!(services[0].0.id, service.id);
    assert_eq!(services[0].1.as_ref().unwrap().id, service_type.id);

    Ok(())
}

/// Tests pair detection and unlinking on the join repository.
#[tokio::test]
async fn pair_exists_and_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, destination) = factory::helpers::create_destination_with_category(db).await?;
    let (_, service) = factory::helpers::create_service_with_type(db).await?;

    let links = DestinationServiceRepository::new(db);

    assert!(!links.pair_exists(destination.id, service.id).await?);

    let link = links.create(destination.id, service.id).await?;
    assert!(links.pair_exists(destination.id, service.id).await?);

    let affected = links.delete(link.id).await?;
    assert_eq!(affected, 1);
    assert!(!links.pair_exists(destination.id, service.id).await?);

    Ok(())
}

/// Tests a destination with no links.
///
/// Expected: empty vec, no error.
#[tokio::test]
async fn unlinked_destination_has_no_services() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, destination) = factory::helpers::create_destination_with_category(db).await?;

    let repo = DestinationRepository::new(db);
    assert!(repo.services_for(destination.id).await?.is_empty());

    Ok(())
}
