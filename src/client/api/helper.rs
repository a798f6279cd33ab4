use crate::{
    client::model::error::ApiError,
    model::api::{Envelope, ErrorDto},
};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Parses a raw JSON body with consistent error handling.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {e}"),
        })
    } else {
        Err(error_from(response, status).await)
    }
}

/// Parses an enveloped response (`{ ok, data }`) and unwraps the payload.
pub async fn parse_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let envelope: Envelope<T> = parse_response(response).await?;
    Ok(envelope.data)
}

/// Parses an enveloped response where only success matters.
pub async fn parse_empty_envelope(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from(response, status).await)
    }
}

async fn error_from(response: Response, status: u64) -> ApiError {
    let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.message
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    };

    ApiError { status, message }
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a PUT request with credentials and JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a DELETE request with credentials
pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Send a request and handle transport errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {e}"),
    })
}

/// Serialize a payload to a JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {e}"),
    })
}

/// Percent-encodes a query value for interpolation into a URL.
pub fn encode_query(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
