use super::*;

use crate::{
    model::destination::{CreateDestinationDto, UpdateDestinationDto},
    server::{
        model::destination::UpdateDestinationParams,
        service::destination::DestinationService,
    },
};

fn create_dto(name: &str, category_id: i32) -> CreateDestinationDto {
    CreateDestinationDto {
        name: name.to_string(),
        category_id,
        summary: "Summary".to_string(),
        description: "Description".to_string(),
        main_image: None,
        hero_image: None,
        featured: false,
        latitude: None,
        longitude: None,
    }
}

/// Tests slug derivation: ASCII-stripped, lowercased, hyphenated.
#[tokio::test]
async fn derives_ascii_slug_from_name() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await.unwrap();

    let service = DestinationService::new(db);
    let (destination, _) = service
        .create(create_dto("Montaña Azul!!", category.id))
        .await
        .unwrap();

    assert_eq!(destination.slug, "montaa-azul");
}

/// Tests slug collision handling: subsequent destinations with the same
/// derived slug get numeric suffixes.
#[tokio::test]
async fn slug_collisions_get_numeric_suffixes() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await.unwrap();

    let service = DestinationService::new(db);
    let (first, _) = service
        .create(create_dto("Playa Grande", category.id))
        .await
        .unwrap();
    let (second, _) = service
        .create(create_dto("Playa   Grande", category.id))
        .await
        .unwrap();
    let (third, _) = service
        .create(create_dto("PLAYA GRANDE", category.id))
        .await
        .unwrap();

    assert_eq!(first.slug, "playa-grande");
    assert_eq!(second.slug, "playa-grande-2");
    assert_eq!(third.slug, "playa-grande-3");
}

/// Tests that a name with no usable characters is rejected.
#[tokio::test]
async fn symbol_only_name_is_rejected() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await.unwrap();

    let service = DestinationService::new(db);
    let result = service.create(create_dto("¡¿!?", category.id)).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Tests the featured-delete guard: delete is rejected while the flag is
/// set and succeeds after clearing it.
#[tokio::test]
async fn featured_destinations_resist_deletion() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await.unwrap();
    let destination = factory::destination::DestinationFactory::new(db, category.id)
        .featured(true)
        .build()
        .await
        .unwrap();

    let service = DestinationService::new(db);

    let blocked = service.delete(destination.id).await;
    assert!(matches!(blocked, Err(AppError::Conflict(_))));

    // Clear the flag, then the delete goes through.
    service
        .update(UpdateDestinationParams {
            id: destination.id,
            name: None,
            category_id: None,
            summary: None,
            description: None,
            main_image: None,
            hero_image: None,
            featured: Some(false),
            latitude: None,
            longitude: None,
        })
        .await
        .unwrap();

    service.delete(destination.id).await.unwrap();
    assert!(service.get_by_id(destination.id).await.unwrap().is_none());
}

/// Tests that a rename does not regenerate the slug.
#[tokio::test]
async fn rename_keeps_the_original_slug() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await.unwrap();

    let service = DestinationService::new(db);
    let (created, _) = service
        .create(create_dto("Cabo Norte", category.id))
        .await
        .unwrap();

    let params = UpdateDestinationParams::from_dto(
        created.id,
        UpdateDestinationDto {
            name: Some("Cabo Sur".to_string()),
            ..Default::default()
        },
    );
    let (updated, _) = service.update(params).await.unwrap().unwrap();

    assert_eq!(updated.name, "Cabo Sur");
    assert_eq!(updated.slug, "cabo-norte");
}

/// Tests linking: unknown ids are NotFound, duplicates are Conflict.
#[tokio::test]
async fn link_rules() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, destination) = factory::helpers::create_destination_with_category(db)
        .await
        .unwrap();
    let (_, linked_service) = factory::helpers::create_service_with_type(db).await.unwrap();

    let service = DestinationService::new(db);

    let missing = service.link_service(destination.id, 4242).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    service
        .link_service(destination.id, linked_service.id)
        .await
        .unwrap();

    let duplicate = service.link_service(destination.id, linked_service.id).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
}
