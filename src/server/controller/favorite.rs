use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{Envelope, ErrorDto},
        favorite::{CreateFavoriteDto, FavoriteDto},
    },
    server::{
        error::AppError,
        model::favorite,
        service::{destination::DestinationService, favorite::FavoriteService},
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Save a destination to a user's favorites. One favorite per
/// (user, destination) pair.
#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    request_body = CreateFavoriteDto,
    responses(
        (status = 201, description = "Favorite created", body = Envelope<FavoriteDto>),
        (status = 400, description = "Destination cannot be favorited", body = ErrorDto),
        (status = 404, description = "User or destination not found", body = ErrorDto),
        (status = 409, description = "Already favorited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    Json(payload): Json<CreateFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let created = FavoriteService::new(&state.db)
        .create(payload.user_id, payload.destination_id)
        .await?;

    let destination = DestinationService::new(&state.db)
        .get_by_id(created.destination_id)
        .await?
        .map(|(model, _)| model);

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(favorite::into_dto(created, destination))),
    ))
}

/// Remove a favorite by row id.
#[utoipa::path(
    delete,
    path = "/api/favorites/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Favorite row ID")),
    responses(
        (status = 200, description = "Favorite removed"),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(Envelope::new(()))))
}

/// A user's favorites with their destinations.
#[utoipa::path(
    get,
    path = "/api/favorites/user/{user_id}",
    tag = FAVORITE_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's favorites", body = Envelope<Vec<FavoriteDto>>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db).get_by_user(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            favorites
                .into_iter()
                .map(|(model, destination)| favorite::into_dto(model, destination))
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Favorite rows pointing at one destination.
#[utoipa::path(
    get,
    path = "/api/favorites/destination/{destination_id}",
    tag = FAVORITE_TAG,
    params(("destination_id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 200, description = "Favorites of the destination", body = Envelope<Vec<FavoriteDto>>),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites_by_destination(
    State(state): State<AppState>,
    Path(destination_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db)
        .get_by_destination(destination_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            favorites
                .into_iter()
                .map(|model| favorite::into_dto(model, None))
                .collect::<Vec<_>>(),
        )),
    ))
}
