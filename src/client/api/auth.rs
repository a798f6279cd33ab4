use crate::{
    client::model::error::ApiError,
    model::user::{LoginDto, UserDto},
};

use super::helper::{get, parse_empty_envelope, parse_envelope, post, send_request, serialize_json};

/// Log in, establishing a session cookie.
pub async fn login(email: String, password: String) -> Result<UserDto, ApiError> {
    let body = serialize_json(&LoginDto { email, password })?;

    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_envelope(response).await
}

/// Log out, clearing the session.
pub async fn logout() -> Result<(), ApiError> {
    let response = send_request(post("/api/auth/logout")).await?;
    parse_empty_envelope(response).await
}

/// The logged-in user, or None for an anonymous session.
pub async fn get_session_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    parse_envelope(response).await
}
