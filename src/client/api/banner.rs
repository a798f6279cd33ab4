use crate::{
    client::model::error::ApiError,
    model::banner::{BannerDto, CreateBannerDto, UpdateBannerDto},
};

use super::helper::{
    delete, get, parse_empty_envelope, parse_envelope, post, put, send_request, serialize_json,
};

/// List banners. `active_only` is what the public site passes; the admin
/// list wants every row including soft-deleted ones.
pub async fn get_banners(active_only: bool) -> Result<Vec<BannerDto>, ApiError> {
    let url = if active_only {
        "/api/banners?active=true"
    } else {
        "/api/banners"
    };

    let response = send_request(get(url)).await?;
    parse_envelope(response).await
}

pub async fn create_banner(payload: CreateBannerDto) -> Result<BannerDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/banners").body(body)).await?;
    parse_envelope(response).await
}

pub async fn update_banner(id: i32, payload: UpdateBannerDto) -> Result<BannerDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(put(&format!("/api/banners/{id}")).body(body)).await?;
    parse_envelope(response).await
}

/// Soft delete: the banner stays in storage with its active flag cleared.
pub async fn deactivate_banner(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/api/banners/{id}"))).await?;
    parse_empty_envelope(response).await
}
