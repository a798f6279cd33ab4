use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{Envelope, ErrorDto},
        upload::UploadedFileDto,
    },
    server::{error::AppError, service::upload::UploadService, state::AppState},
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Field names accepted for a single-image upload; each entity form posts
/// under its own name.
const SINGLE_IMAGE_FIELDS: &[&str] = &["image", "main_image", "hero_image"];

/// Upload a single image.
///
/// The first field named `image`, `main_image` or `hero_image` is stored
/// under a randomized filename; the response carries both the stored name
/// (to persist) and the full public URL (to display).
#[utoipa::path(
    post,
    path = "/api/uploads",
    tag = UPLOAD_TAG,
    responses(
        (status = 201, description = "Stored upload", body = Envelope<UploadedFileDto>),
        (status = 400, description = "No image field, bad content type, or oversized file", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let uploads = UploadService::new(&state.upload_dir, state.max_upload_bytes);

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if !SINGLE_IMAGE_FIELDS.contains(&name.as_str()) {
            continue;
        }

        let original = field.file_name().map(str::to_string);
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await?;

        let filename = uploads
            .store(original.as_deref(), &content_type, data)
            .await?;
        let url = format!("{}/uploads/{filename}", state.app_url);

        return Ok((
            StatusCode::CREATED,
            Json(Envelope::new(UploadedFileDto { filename, url })),
        ));
    }

    Err(AppError::Validation(
        "Multipart body carried no image field".to_string(),
    ))
}

/// Upload several images at once under the `images` field.
#[utoipa::path(
    post,
    path = "/api/uploads/batch",
    tag = UPLOAD_TAG,
    responses(
        (status = 201, description = "Stored uploads", body = Envelope<Vec<UploadedFileDto>>),
        (status = 400, description = "No image fields, bad content type, or oversized file", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let uploads = UploadService::new(&state.upload_dir, state.max_upload_bytes);

    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name().unwrap_or_default() != "images" {
            continue;
        }

        let original = field.file_name().map(str::to_string);
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await?;

        let filename = uploads
            .store(original.as_deref(), &content_type, data)
            .await?;
        let url = format!("{}/uploads/{filename}", state.app_url);

        files.push(UploadedFileDto { filename, url });
    }

    if files.is_empty() {
        return Err(AppError::Validation(
            "Multipart body carried no images fields".to_string(),
        ));
    }

    Ok((StatusCode::CREATED, Json(Envelope::new(files))))
}
