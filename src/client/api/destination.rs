use crate::{
    client::model::error::ApiError,
    model::{
        destination::{CreateDestinationDto, DestinationDto, UpdateDestinationDto},
        service::ServiceDto,
    },
};

use super::helper::{
    delete, encode_query, get, parse_empty_envelope, parse_envelope, post, put, send_request,
    serialize_json,
};

/// List destinations; filters are appended only when present.
pub async fn get_destinations(
    category_id: Option<i32>,
    featured: Option<bool>,
    q: Option<&str>,
) -> Result<Vec<DestinationDto>, ApiError> {
    let mut params = Vec::new();
    if let Some(category_id) = category_id {
        params.push(format!("category_id={category_id}"));
    }
    if let Some(featured) = featured {
        params.push(format!("featured={featured}"));
    }
    if let Some(q) = q.filter(|q| !q.is_empty()) {
        params.push(format!("q={}", encode_query(q)));
    }

    let url = if params.is_empty() {
        "/api/destinations".to_string()
    } else {
        format!("/api/destinations?{}", params.join("&"))
    };

    let response = send_request(get(&url)).await?;
    parse_envelope(response).await
}

pub async fn get_destination_by_slug(slug: &str) -> Result<DestinationDto, ApiError> {
    let response = send_request(get(&format!("/api/destinations/slug/{slug}"))).await?;
    parse_envelope(response).await
}

pub async fn get_destination_services(id: i32) -> Result<Vec<ServiceDto>, ApiError> {
    let response = send_request(get(&format!("/api/destinations/{id}/services"))).await?;
    parse_envelope(response).await
}

pub async fn create_destination(
    payload: CreateDestinationDto,
) -> Result<DestinationDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/destinations").body(body)).await?;
    parse_envelope(response).await
}

pub async fn update_destination(
    id: i32,
    payload: UpdateDestinationDto,
) -> Result<DestinationDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(put(&format!("/api/destinations/{id}")).body(body)).await?;
    parse_envelope(response).await
}

pub async fn delete_destination(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/api/destinations/{id}"))).await?;
    parse_empty_envelope(response).await
}
