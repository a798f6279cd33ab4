//! Server-side API backend and business logic.
//!
//! Complete backend implementation for the tourism portal: REST API
//! endpoints, business rules, and data access. The backend uses Axum as the
//! web framework and SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and data
//! - **Data Layer** (`data/`) - Repositories wrapping SeaORM queries
//! - **Model Layer** (`model/`) - Operation parameter types and DTO conversions
//! - **Error Layer** (`error/`) - Structured error taxonomy and HTTP mapping
//! - **Middleware** (`middleware/`) - Session wrappers and permission guards
//!
//! A request flows router → controller → service → repository → database and
//! back, one round trip per request. Only available with the `server`
//! feature flag.

pub mod capabilities;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
