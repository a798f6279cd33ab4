//! Error types and HTTP response handling.
//!
//! `AppError` is the application-wide error type. The request taxonomy is
//! carried in dedicated variants (`Validation`, `NotFound`, `Conflict`)
//! rather than encoded in message strings, so controllers never inspect
//! message text to pick a status code. Infrastructure failures wrap their
//! source errors transparently and all map to 500 with the detail logged
//! server-side only.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup. 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication failure; maps its own status codes.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM. 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error. 500.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Malformed multipart body. 400.
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),

    /// Filesystem error while storing or removing uploads. 500.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Missing or malformed input. 400 with the message.
    #[error("{0}")]
    Validation(String),

    /// Referenced row absent. 404 with the message.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate relation or a delete blocked by a business rule. 409 with
    /// the message.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected internal failure. 500; the message is logged, never sent.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto::new(msg))).into_response()
            }
            Self::MultipartErr(err) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(err.to_string()))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response with a
/// generic body. The full error is logged for diagnostics; the client only
/// ever sees "Internal server error".
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
