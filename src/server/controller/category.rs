use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{Envelope, ErrorDto},
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        error::AppError,
        model::category::{CreateCategoryParams, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Create a new category.
///
/// # Returns
/// - `201 Created` - The created category
/// - `400 Bad Request` - Missing name
/// - `409 Conflict` - Name already in use
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = Envelope<CategoryDto>),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 409, description = "Category name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let category = service
        .create(CreateCategoryParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(CategoryDto::from(category))),
    ))
}

/// List all categories, ordered by name.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = Envelope<Vec<CategoryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            categories
                .into_iter()
                .map(CategoryDto::from)
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Get a category by id.
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "The category", body = Envelope<CategoryDto>),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(category) => Ok((
            StatusCode::OK,
            Json(Envelope::new(CategoryDto::from(category))),
        )),
        None => Err(AppError::NotFound("Category not found".to_string())),
    }
}

/// Partially update a category. Omitted fields stay unchanged; an explicit
/// null image clears it.
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Updated category", body = Envelope<CategoryDto>),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    match service
        .update(UpdateCategoryParams::from_dto(id, payload))
        .await?
    {
        Some(category) => Ok((
            StatusCode::OK,
            Json(Envelope::new(CategoryDto::from(category))),
        )),
        None => Err(AppError::NotFound("Category not found".to_string())),
    }
}

/// Delete a category. Rejected while destinations still reference it.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category still referenced by destinations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    service.delete(id).await?;

    Ok((StatusCode::OK, Json(Envelope::new(()))))
}
