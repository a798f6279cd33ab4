use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{Envelope, ErrorDto},
        service::{
            CreateServiceDto, CreateServiceTypeDto, ServiceDto, ServiceTypeDto, UpdateServiceDto,
            UpdateServiceTypeDto,
        },
    },
    server::{
        error::AppError,
        model::service::{
            self, CreateServiceParams, CreateServiceTypeParams, UpdateServiceParams,
            UpdateServiceTypeParams,
        },
        service::service::{ServiceService, ServiceTypeService},
        state::AppState,
    },
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

#[derive(Deserialize)]
pub struct ServiceListQuery {
    pub service_type_id: Option<i32>,
    pub q: Option<String>,
}

/// Create a service type.
#[utoipa::path(
    post,
    path = "/api/service-types",
    tag = SERVICE_TAG,
    request_body = CreateServiceTypeDto,
    responses(
        (status = 201, description = "Created service type", body = Envelope<ServiceTypeDto>),
        (status = 400, description = "Invalid service type data", body = ErrorDto),
        (status = 409, description = "Name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let created = ServiceTypeService::new(&state.db)
        .create(CreateServiceTypeParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(ServiceTypeDto::from(created))),
    ))
}

/// List all service types.
#[utoipa::path(
    get,
    path = "/api/service-types",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "All service types", body = Envelope<Vec<ServiceTypeDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let types = ServiceTypeService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            types
                .into_iter()
                .map(ServiceTypeDto::from)
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Get a service type by id.
#[utoipa::path(
    get,
    path = "/api/service-types/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service type ID")),
    responses(
        (status = 200, description = "The service type", body = Envelope<ServiceTypeDto>),
        (status = 404, description = "Service type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_type_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match ServiceTypeService::new(&state.db).get_by_id(id).await? {
        Some(service_type) => Ok((
            StatusCode::OK,
            Json(Envelope::new(ServiceTypeDto::from(service_type))),
        )),
        None => Err(AppError::NotFound("Service type not found".to_string())),
    }
}

/// Partially update a service type.
#[utoipa::path(
    put,
    path = "/api/service-types/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service type ID")),
    request_body = UpdateServiceTypeDto,
    responses(
        (status = 200, description = "Updated service type", body = Envelope<ServiceTypeDto>),
        (status = 404, description = "Service type not found", body = ErrorDto),
        (status = 409, description = "Name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServiceTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    match ServiceTypeService::new(&state.db)
        .update(UpdateServiceTypeParams::from_dto(id, payload))
        .await?
    {
        Some(service_type) => Ok((
            StatusCode::OK,
            Json(Envelope::new(ServiceTypeDto::from(service_type))),
        )),
        None => Err(AppError::NotFound("Service type not found".to_string())),
    }
}

/// Delete a service type. Rejected while services still reference it.
#[utoipa::path(
    delete,
    path = "/api/service-types/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service type ID")),
    responses(
        (status = 200, description = "Service type deleted"),
        (status = 404, description = "Service type not found", body = ErrorDto),
        (status = 409, description = "Service type still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ServiceTypeService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(Envelope::new(()))))
}

/// Create a service.
#[utoipa::path(
    post,
    path = "/api/services",
    tag = SERVICE_TAG,
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Created service", body = Envelope<ServiceDto>),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 404, description = "Service type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let (created, service_type) = ServiceService::new(&state.db)
        .create(CreateServiceParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(service::into_dto(created, service_type))),
    ))
}

/// List services, optionally filtered by type and substring.
#[utoipa::path(
    get,
    path = "/api/services",
    tag = SERVICE_TAG,
    params(
        ("service_type_id" = Option<i32>, Query, description = "Filter by service type"),
        ("q" = Option<String>, Query, description = "Substring match across name and description")
    ),
    responses(
        (status = 200, description = "Matching services", body = Envelope<Vec<ServiceDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let services = ServiceService::new(&state.db)
        .get_all(query.service_type_id, query.q.as_deref())
        .await?;

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

/// Get a service by id.
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "The service", body = Envelope<ServiceDto>),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match ServiceService::new(&state.db).get_by_id(id).await? {
        Some((model, service_type)) => Ok((
            StatusCode::OK,
            Json(Envelope::new(service::into_dto(model, service_type))),
        )),
        None => Err(AppError::NotFound("Service not found".to_string())),
    }
}

/// Partially update a service.
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Updated service", body = Envelope<ServiceDto>),
        (status = 400, description = "Invalid price range", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    match ServiceService::new(&state.db)
        .update(UpdateServiceParams::from_dto(id, payload))
        .await?
    {
        Some((model, service_type)) => Ok((
            StatusCode::OK,
            Json(Envelope::new(service::into_dto(model, service_type))),
        )),
        None => Err(AppError::NotFound("Service not found".to_string())),
    }
}

/// Delete a service.
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service deleted"),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ServiceService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(Envelope::new(()))))
}
