use super::*;

use crate::server::{
    model::service::{CreateServiceParams, UpdateServiceParams},
    service::service::{ServiceService, ServiceTypeService},
};

fn create_params(service_type_id: i32) -> CreateServiceParams {
    CreateServiceParams {
        name: "Kayak rental".to_string(),
        service_type_id,
        location: "North pier".to_string(),
        description: "Hourly kayak rental".to_string(),
        price_min: Some(15.0),
        price_max: Some(60.0),
        image: Some("kayak.jpg".to_string()),
    }
}

fn empty_patch(id: i32) -> UpdateServiceParams {
    UpdateServiceParams {
        id,
        name: None,
        service_type_id: None,
        location: None,
        description: None,
        price_min: None,
        price_max: None,
        image: None,
    }
}

/// Tests the inverted price range rejection on create.
#[tokio::test]
async fn inverted_price_range_is_rejected() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service_type = factory::service::create_service_type(db).await.unwrap();

    let service = ServiceService::new(db);
    let mut params = create_params(service_type.id);
    params.price_min = Some(100.0);
    params.price_max = Some(10.0);

    let result = service.create(params).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Tests that a single-bound patch is validated against the stored other
/// bound.
#[tokio::test]
async fn patch_cannot_cross_the_stored_bound() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service_type = factory::service::create_service_type(db).await.unwrap();

    let service = ServiceService::new(db);
    let (created, _) = service.create(create_params(service_type.id)).await.unwrap();

    // Stored max is 60; a min above it must be rejected.
    let mut params = empty_patch(created.id);
    params.price_min = Some(90.0);

    let result = service.update(params).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Tests the create → partial update → read round trip for services,
/// including the explicit image clear.
#[tokio::test]
async fn patch_round_trip() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service_type = factory::service::create_service_type(db).await.unwrap();

    let service = ServiceService::new(db);
    let (created, _) = service.create(create_params(service_type.id)).await.unwrap();

    let mut params = empty_patch(created.id);
    params.location = Some("South pier".to_string());
    params.image = Some(None);

    let (updated, _) = service.update(params).await.unwrap().unwrap();

    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.location, "South pier");
    assert_eq!(updated.image, None);
    assert_eq!(updated.price_min, created.price_min);

    let (read_back, _) = service.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(read_back, updated);
}

/// Tests the service-type delete guard.
#[tokio::test]
async fn service_type_in_use_resists_deletion() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (service_type, service_row) = factory::helpers::create_service_with_type(db)
        .await
        .unwrap();

    let types = ServiceTypeService::new(db);

    let blocked = types.delete(service_type.id).await;
    assert!(matches!(blocked, Err(AppError::Conflict(_))));

    ServiceService::new(db).delete(service_row.id).await.unwrap();
    types.delete(service_type.id).await.unwrap();
}
