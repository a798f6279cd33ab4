use crate::{
    client::model::error::ApiError,
    model::service::{
        CreateServiceDto, CreateServiceTypeDto, ServiceDto, ServiceTypeDto, UpdateServiceDto,
    },
};

use super::helper::{
    delete, encode_query, get, parse_empty_envelope, parse_envelope, post, put, send_request,
    serialize_json,
};

pub async fn get_service_types() -> Result<Vec<ServiceTypeDto>, ApiError> {
    let response = send_request(get("/api/service-types")).await?;
    parse_envelope(response).await
}

pub async fn create_service_type(
    payload: CreateServiceTypeDto,
) -> Result<ServiceTypeDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/service-types").body(body)).await?;
    parse_envelope(response).await
}

pub async fn delete_service_type(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/api/service-types/{id}"))).await?;
    parse_empty_envelope(response).await
}

pub async fn get_services(
    service_type_id: Option<i32>,
    q: Option<&str>,
) -> Result<Vec<ServiceDto>, ApiError> {
    let mut params = Vec::new();
    if let Some(type_id) = service_type_id {
        params.push(format!("service_type_id={type_id}"));
    }
    if let Some(q) = q.filter(|q| !q.is_empty()) {
        params.push(format!("q={}", encode_query(q)));
    }

    let url = if params.is_empty() {
        "/api/services".to_string()
    } else {
        format!("/api/services?{}", params.join("&"))
    };

    let response = send_request(get(&url)).await?;
    parse_envelope(response).await
}

pub async fn create_service(payload: CreateServiceDto) -> Result<ServiceDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/services").body(body)).await?;
    parse_envelope(response).await
}

pub async fn update_service(id: i32, payload: UpdateServiceDto) -> Result<ServiceDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(put(&format!("/api/services/{id}")).body(body)).await?;
    parse_envelope(response).await
}

pub async fn delete_service(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/api/services/{id}"))).await?;
    parse_empty_envelope(response).await
}
