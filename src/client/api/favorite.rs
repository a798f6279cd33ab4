use crate::{
    client::model::error::ApiError,
    model::favorite::{CreateFavoriteDto, FavoriteDto},
};

use super::helper::{
    delete, get, parse_empty_envelope, parse_envelope, post, send_request, serialize_json,
};

pub async fn create_favorite(user_id: i32, destination_id: i32) -> Result<FavoriteDto, ApiError> {
    let body = serialize_json(&CreateFavoriteDto {
        user_id,
        destination_id,
    })?;

    let response = send_request(post("/api/favorites").body(body)).await?;
    parse_envelope(response).await
}

pub async fn delete_favorite(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/api/favorites/{id}"))).await?;
    parse_empty_envelope(response).await
}

pub async fn get_favorites_by_user(user_id: i32) -> Result<Vec<FavoriteDto>, ApiError> {
    let response = send_request(get(&format!("/api/favorites/user/{user_id}"))).await?;
    parse_envelope(response).await
}
