//! DTOs shared between the web client and the server API.
//!
//! Everything here is plain serde data. Schema derives for the OpenAPI
//! documentation are gated behind the `server` feature so the WASM build
//! does not pull in utoipa.

pub mod api;
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
