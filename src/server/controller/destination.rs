use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{Envelope, ErrorDto},
        destination::{
            CreateDestinationDto, DestinationDto, DestinationFilterDto, UpdateDestinationDto,
        },
        service::{CreateDestinationServiceDto, DestinationServiceDto, ServiceDto},
    },
    server::{
        error::AppError,
        model::{
            destination::{self, DestinationFilter, UpdateDestinationParams},
            service,
        },
        service::destination::DestinationService,
        state::AppState,
    },
};

/// Tag for grouping destination endpoints in OpenAPI documentation
pub static DESTINATION_TAG: &str = "destination";

/// Create a new destination.
///
/// The slug is derived from the name server-side; collisions get a numeric
/// suffix.
#[utoipa::path(
    post,
    path = "/api/destinations",
    tag = DESTINATION_TAG,
    request_body = CreateDestinationDto,
    responses(
        (status = 201, description = "Successfully created destination", body = Envelope<DestinationDto>),
        (status = 400, description = "Invalid destination data", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_destination(
    State(state): State<AppState>,
    Json(payload): Json<CreateDestinationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DestinationService::new(&state.db);

    let (created, category) = service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(destination::into_dto(created, category))),
    ))
}

/// List destinations. Category, featured and substring filters combine
/// freely.
#[utoipa::path(
    get,
    path = "/api/destinations",
    tag = DESTINATION_TAG,
    params(
        ("category_id" = Option<i32>, Query, description = "Filter by category"),
        ("featured" = Option<bool>, Query, description = "Filter by featured flag"),
        ("q" = Option<String>, Query, description = "Substring match across name and description")
    ),
    responses(
        (status = 200, description = "Matching destinations", body = Envelope<Vec<DestinationDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destinations(
    State(state): State<AppState>,
    Query(filter): Query<DestinationFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DestinationService::new(&state.db);

    let destinations = service
        .get_all(DestinationFilter::from_dto(filter))
        .await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            destinations
                .into_iter()
                .map(|(model, category)| destination::into_dto(model, category))
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Get a destination by id.
#[utoipa::path(
    get,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(("id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 200, description = "The destination", body = Envelope<DestinationDto>),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destination_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DestinationService::new(&state.db);

    match service.get_by_id(id).await? {
        Some((model, category)) => Ok((
            StatusCode::OK,
            Json(Envelope::new(destination::into_dto(model, category))),
        )),
        None => Err(AppError::NotFound("Destination not found".to_string())),
    }
}

/// Get a destination by slug.
///
/// This is the public detail-page lookup; it best-effort records a visit
/// when the deployment carries a visit log.
#[utoipa::path(
    get,
    path = "/api/destinations/slug/{slug}",
    tag = DESTINATION_TAG,
    params(("slug" = String, Path, description = "Destination slug")),
    responses(
        (status = 200, description = "The destination", body = Envelope<DestinationDto>),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destination_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DestinationService::new(&state.db);

    match service
        .get_by_slug(&slug, state.capabilities.visits)
        .await?
    {
        Some((model, category)) => Ok((
            StatusCode::OK,
            Json(Envelope::new(destination::into_dto(model, category))),
        )),
        None => Err(AppError::NotFound("Destination not found".to_string())),
    }
}

/// Partially update a destination. The slug never changes after creation.
#[utoipa::path(
    put,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(("id" = i32, Path, description = "Destination ID")),
    request_body = UpdateDestinationDto,
    responses(
        (status = 200, description = "Updated destination", body = Envelope<DestinationDto>),
        (status = 400, description = "Invalid destination data", body = ErrorDto),
        (status = 404, description = "Destination or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_destination(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDestinationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DestinationService::new(&state.db);

    match service
        .update(UpdateDestinationParams::from_dto(id, payload))
        .await?
    {
        Some((model, category)) => Ok((
            StatusCode::OK,
            Json(Envelope::new(destination::into_dto(model, category))),
        )),
        None => Err(AppError::NotFound("Destination not found".to_string())),
    }
}

/// Delete a destination. Featured destinations are protected; unfeature
/// them first.
#[utoipa::path(
    delete,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(("id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 200, description = "Destination deleted"),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 409, description = "Destination is featured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_destination(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DestinationService::new(&state.db);

    service.delete(id).await?;

    Ok((StatusCode::OK, Json(Envelope::new(()))))
}

/// List the services linked to a destination.
#[utoipa::path(
    get,
    path = "/api/destinations/{id}/services",
    tag = DESTINATION_TAG,
    params(("id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 200, description = "Linked services", body = Envelope<Vec<ServiceDto>>),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destination_services(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let services = DestinationService::new(&state.db).services_for(id).await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            services
                .into_iter()
                .map(|(model, service_type)| service::into_dto(model, service_type))
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Link a service to a destination.
#[utoipa::path(
    post,
    path = "/api/destination-services",
    tag = DESTINATION_TAG,
    request_body = CreateDestinationServiceDto,
    responses(
        (status = 201, description = "Link created", body = Envelope<DestinationServiceDto>),
        (status = 404, description = "Destination or service not found", body = ErrorDto),
        (status = 409, description = "Pair already linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_destination_service(
    State(state): State<AppState>,
    Json(payload): Json<CreateDestinationServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let link = DestinationService::new(&state.db)
        .link_service(payload.destination_id, payload.service_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(DestinationServiceDto::from(link))),
    ))
}

/// Remove a destination/service link.
#[utoipa::path(
    delete,
    path = "/api/destination-services/{id}",
    tag = DESTINATION_TAG,
    params(("id" = i32, Path, description = "Link row ID")),
    responses(
        (status = 200, description = "Link removed"),
        (status = 404, description = "Link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_destination_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    DestinationService::new(&state.db).unlink_service(id).await?;

    Ok((StatusCode::OK, Json(Envelope::new(()))))
}
