use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// A saved destination, enriched with enough of the destination row to
/// render a favorites list without a second round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub destination_id: i32,
    pub destination_name: String,
    pub destination_slug: String,
    pub main_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateFavoriteDto {
    pub user_id: i32,
    pub destination_id: i32,
}
