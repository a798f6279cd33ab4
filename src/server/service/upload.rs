//! Stored-upload handling: content-type allow-list, size cap, and
//! collision-resistant renaming.

use axum::body::Bytes;
use rand::{distr::Alphanumeric, Rng};
use std::path::Path;

use crate::server::error::AppError;

/// Content types accepted for any image upload.
pub const ALLOWED_IMAGE_TYPES: &[&str] =
    &["image/png", "image/jpeg", "image/webp", "image/gif"];

const STORED_NAME_LEN: usize = 16;

pub struct UploadService<'a> {
    upload_dir: &'a str,
    max_bytes: usize,
}

impl<'a> UploadService<'a> {
    pub fn new(upload_dir: &'a str, max_bytes: usize) -> Self {
        Self {
            upload_dir,
            max_bytes,
        }
    }

    /// Validates and persists one file, returning the stored filename.
    /// The upload directory is created on first use.
    pub async fn store(
        &self,
        original_name: Option<&str>,
        content_type: &str,
        data: Bytes,
    ) -> Result<String, AppError> {
        self.validate(content_type, data.len())?;

        tokio::fs::create_dir_all(self.upload_dir).await?;

        let stored = stored_name(original_name, content_type);
        tokio::fs::write(Path::new(self.upload_dir).join(&stored), &data).await?;

        Ok(stored)
    }

    pub fn validate(&self, content_type: &str, len: usize) -> Result<(), AppError> {
        if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
            return Err(AppError::Validation(format!(
                "Unsupported content type '{content_type}'; expected one of {}",
                ALLOWED_IMAGE_TYPES.join(", ")
            )));
        }
        if len > self.max_bytes {
            return Err(AppError::Validation(format!(
                "File exceeds the {} byte upload limit",
                self.max_bytes
            )));
        }

        Ok(())
    }
}

/// Random 16-character alphanumeric name preserving the original extension.
/// Falls back to an extension derived from the content type when the
/// original name carries none.
fn stored_name(original_name: Option<&str>, content_type: &str) -> String {
    let ext = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| extension_for(content_type).to_string());

    let stem: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STORED_NAME_LEN)
        .map(char::from)
        .collect();

    format!("{stem}.{ext}")
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "bin",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_non_image_content_type() {
        let service = UploadService::new("uploads", 1024);
        assert!(service.validate("application/pdf", 10).is_err());
    }

    #[test]
    fn accepts_png_within_limit() {
        let service = UploadService::new("uploads", 1024);
        assert!(service.validate("image/png", 1024).is_ok());
    }

    #[test]
    fn rejects_oversized_file() {
        let service = UploadService::new("uploads", 1024);
        assert!(service.validate("image/png", 1025).is_err());
    }

    #[test]
    fn stored_name_preserves_extension() {
        let name = stored_name(Some("Sunset Beach.JPG"), "image/jpeg");
        assert!(name.ends_with(".jpg"));
        assert_eq!(name.len(), STORED_NAME_LEN + ".jpg".len());
    }

    #[test]
    fn stored_name_falls_back_to_content_type() {
        let name = stored_name(None, "image/png");
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn stored_names_do_not_collide() {
        let a = stored_name(Some("a.png"), "image/png");
        let b = stored_name(Some("a.png"), "image/png");
        assert_ne!(a, b);
    }
}
