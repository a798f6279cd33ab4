//! HTTP request handlers.
//!
//! Controllers parse path/query/body input, invoke exactly one service
//! method, and shape the response envelope. Status codes come from
//! `AppError`'s `IntoResponse` mapping; no controller inspects error
//! message text.

pub mod auth;
pub mod banner;
pub mod category;
pub mod dashboard;
pub mod destination;
pub mod event;
pub mod favorite;
pub mod gallery;
pub mod service;
pub mod upload;
pub mod user;
