//! Business logic layer between controllers and repositories.
//!
//! Services own the write-side rules: existence and duplicate checks ahead
//! of inserts, delete guards, slug derivation, and numeric normalization.
//! They return `AppError` variants carrying the error taxonomy directly.

pub mod auth;
pub mod banner;
pub mod category;
pub mod credential;
pub mod dashboard;
pub mod destination;
pub mod event;
pub mod favorite;
pub mod gallery;
pub mod service;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
