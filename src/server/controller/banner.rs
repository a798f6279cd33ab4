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
        banner::{BannerDto, CreateBannerDto, UpdateBannerDto},
    },
    server::{
        error::AppError,
        model::banner::{CreateBannerParams, UpdateBannerParams},
        service::banner::BannerService,
        state::AppState,
    },
};

/// Tag for grouping banner endpoints in OpenAPI documentation
pub static BANNER_TAG: &str = "banner";

#[derive(Deserialize)]
pub struct BannerListQuery {
    pub active: Option<bool>,
}

/// Create a banner; new banners start active.
#[utoipa::path(
    post,
    path = "/api/banners",
    tag = BANNER_TAG,
    request_body = CreateBannerDto,
    responses(
        (status = 201, description = "Created banner", body = Envelope<BannerDto>),
        (status = 400, description = "Invalid banner data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_banner(
    State(state): State<AppState>,
    Json(payload): Json<CreateBannerDto>,
) -> Result<impl IntoResponse, AppError> {
    let banner = BannerService::new(&state.db)
        .create(CreateBannerParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(BannerDto::from(banner))),
    ))
}

/// List banners in display order. The public site passes `active=true`;
/// the admin list omits the filter to see soft-deleted rows too.
#[utoipa::path(
    get,
    path = "/api/banners",
    tag = BANNER_TAG,
    params(("active" = Option<bool>, Query, description = "Filter by active flag")),
    responses(
        (status = 200, description = "Banners", body = Envelope<Vec<BannerDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banners(
    State(state): State<AppState>,
    Query(query): Query<BannerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let banners = BannerService::new(&state.db).get_all(query.active).await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            banners.into_iter().map(BannerDto::from).collect::<Vec<_>>(),
        )),
    ))
}

/// Get a banner by id.
#[utoipa::path(
    get,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner ID")),
    responses(
        (status = 200, description = "The banner", body = Envelope<BannerDto>),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banner_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match BannerService::new(&state.db).get_by_id(id).await? {
        Some(banner) => Ok((StatusCode::OK, Json(Envelope::new(BannerDto::from(banner))))),
        None => Err(AppError::NotFound("Banner not found".to_string())),
    }
}

/// Partially update a banner, including reactivation.
#[utoipa::path(
    put,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner ID")),
    request_body = UpdateBannerDto,
    responses(
        (status = 200, description = "Updated banner", body = Envelope<BannerDto>),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBannerDto>,
) -> Result<impl IntoResponse, AppError> {
    match BannerService::new(&state.db)
        .update(UpdateBannerParams::from_dto(id, payload))
        .await?
    {
        Some(banner) => Ok((StatusCode::OK, Json(Envelope::new(BannerDto::from(banner))))),
        None => Err(AppError::NotFound("Banner not found".to_string())),
    }
}

/// Soft-delete a banner: the row keeps its data with the active flag
/// cleared, and can be reactivated through PUT.
#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner ID")),
    responses(
        (status = 200, description = "Banner deactivated", body = Envelope<BannerDto>),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let banner = BannerService::new(&state.db).deactivate(id).await?;

    Ok((StatusCode::OK, Json(Envelope::new(BannerDto::from(banner)))))
}
