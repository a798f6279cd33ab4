use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Email/password pair did not verify. 401 with a deliberately vague
    /// message so the response does not reveal which half was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Request requires a logged-in session and none is present. 401.
    #[error("Not logged in")]
    NotLoggedIn,

    /// Session references a user id that no longer exists.
    #[error("Session user {0} not found in database")]
    UserNotInDatabase(i32),

    /// Logged-in user lacks the required role. 403.
    #[error("User {0} lacks the required permission")]
    AccessDenied(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid email or password")),
            )
                .into_response(),
            Self::NotLoggedIn | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Not logged in")),
            )
                .into_response(),
            Self::AccessDenied(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("Insufficient permissions")),
            )
                .into_response(),
        }
    }
}
