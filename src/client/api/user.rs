use crate::{
    client::model::error::ApiError,
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
};

use super::helper::{
    delete, get, parse_empty_envelope, parse_envelope, post, put, send_request, serialize_json,
};

pub async fn get_users() -> Result<Vec<UserDto>, ApiError> {
    let response = send_request(get("/api/users")).await?;
    parse_envelope(response).await
}

pub async fn create_user(payload: CreateUserDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/users").body(body)).await?;
    parse_envelope(response).await
}

pub async fn update_user(id: i32, payload: UpdateUserDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(put(&format!("/api/users/{id}")).body(body)).await?;
    parse_envelope(response).await
}

pub async fn delete_user(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/api/users/{id}"))).await?;
    parse_empty_envelope(response).await
}
