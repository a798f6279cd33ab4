//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned cheaply per request through
//! Axum's state extraction: the database handle is a pooled connection,
//! the credential verifier sits behind an `Arc`, and the remaining fields
//! are plain values.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    capabilities::Capabilities, config::Config, service::credential::CredentialVerifier,
};

#[derive(Clone)]
pub struct AppState {
    /// Pooled database connection.
    pub db: DatabaseConnection,

    /// Which optional analytics tables exist in this deployment. Probed
    /// once at startup.
    pub capabilities: Capabilities,

    /// Credential verification strategy. The algorithm is swappable; the
    /// rest of the code only sees this interface.
    pub verifier: Arc<dyn CredentialVerifier>,

    /// Public base URL, for building upload URLs.
    pub app_url: String,

    /// Directory stored uploads are written to.
    pub upload_dir: String,

    /// Per-file upload size cap in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        config: &Config,
        capabilities: Capabilities,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            db,
            capabilities,
            verifier,
            app_url: config.app_url.clone(),
            upload_dir: config.upload_dir.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}
