use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{Envelope, ErrorDto},
        gallery::GalleryImageDto,
    },
    server::{
        error::AppError,
        service::{gallery::GalleryService, upload::UploadService},
        state::AppState,
    },
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static GALLERY_TAG: &str = "gallery";

/// Upload gallery images for a destination.
///
/// Multipart body: a `destination_id` text field plus one or more `images`
/// file fields. Files are validated and stored first, then attached as
/// gallery rows.
#[utoipa::path(
    post,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    responses(
        (status = 201, description = "Gallery images created", body = Envelope<Vec<GalleryImageDto>>),
        (status = 400, description = "Missing destination_id or no valid images", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_gallery_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let uploads = UploadService::new(&state.upload_dir, state.max_upload_bytes);

    let mut destination_id: Option<i32> = None;
    let mut stored: Vec<String> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "destination_id" => {
                let text = field.text().await?;
                destination_id = Some(text.trim().parse().map_err(|_| {
                    AppError::Validation(format!("'{text}' is not a destination id"))
                })?);
            }
            "images" | "image" => {
                let original = field.file_name().map(str::to_string);
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field.bytes().await?;

                stored.push(
                    uploads
                        .store(original.as_deref(), &content_type, data)
                        .await?,
                );
            }
            _ => continue,
        }
    }

    let destination_id = destination_id
        .ok_or_else(|| AppError::Validation("destination_id field is required".to_string()))?;

    let images = GalleryService::new(&state.db)
        .add_images(destination_id, stored)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(
            images
                .into_iter()
                .map(GalleryImageDto::from)
                .collect::<Vec<_>>(),
        )),
    ))
}

/// A destination's gallery, oldest first.
#[utoipa::path(
    get,
    path = "/api/gallery/destination/{destination_id}",
    tag = GALLERY_TAG,
    params(("destination_id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 200, description = "Gallery images", body = Envelope<Vec<GalleryImageDto>>),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gallery_by_destination(
    State(state): State<AppState>,
    Path(destination_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let images = GalleryService::new(&state.db)
        .get_by_destination(destination_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            images
                .into_iter()
                .map(GalleryImageDto::from)
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Delete one gallery image row.
#[utoipa::path(
    delete,
    path = "/api/gallery/{id}",
    tag = GALLERY_TAG,
    params(("id" = i32, Path, description = "Gallery image ID")),
    responses(
        (status = 200, description = "Gallery image deleted"),
        (status = 404, description = "Gallery image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    GalleryService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(Envelope::new(()))))
}
