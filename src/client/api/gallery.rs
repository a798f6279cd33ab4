use crate::{client::model::error::ApiError, model::gallery::GalleryImageDto};

use super::helper::{get, parse_envelope, send_request};

pub async fn get_gallery_by_destination(
    destination_id: i32,
) -> Result<Vec<GalleryImageDto>, ApiError> {
    let response =
        send_request(get(&format!("/api/gallery/destination/{destination_id}"))).await?;
    parse_envelope(response).await
}
