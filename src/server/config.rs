use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub struct Config {
    pub database_url: String,

    /// Public base URL of the deployment, used to build upload URLs.
    pub app_url: String,

    /// Directory that stored uploads are written to and served from.
    pub upload_dir: String,

    /// Per-file upload size cap in bytes.
    pub max_upload_bytes: usize,

    /// Optional first-admin seed credentials; both must be set to take
    /// effect.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = std::env::var("APP_URL")
            .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?;
        url::Url::parse(&app_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        })?;

        let max_upload_bytes = match std::env::var("MAX_UPLOAD_BYTES") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "MAX_UPLOAD_BYTES".to_string(),
                reason: format!("'{raw}' is not a byte count"),
            })?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: app_url.trim_end_matches('/').to_string(),
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            max_upload_bytes,
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        })
    }
}
