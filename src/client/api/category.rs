use crate::{
    client::model::error::ApiError,
    model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
};

use super::helper::{
    delete, get, parse_empty_envelope, parse_envelope, post, put, send_request, serialize_json,
};

pub async fn get_categories() -> Result<Vec<CategoryDto>, ApiError> {
    let response = send_request(get("/api/categories")).await?;
    parse_envelope(response).await
}

pub async fn create_category(payload: CreateCategoryDto) -> Result<CategoryDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/categories").body(body)).await?;
    parse_envelope(response).await
}

pub async fn update_category(
    id: i32,
    payload: UpdateCategoryDto,
) -> Result<CategoryDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(put(&format!("/api/categories/{id}")).body(body)).await?;
    parse_envelope(response).await
}

pub async fn delete_category(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/api/categories/{id}"))).await?;
    parse_empty_envelope(response).await
}
