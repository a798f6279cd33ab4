use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::api::nullable_patch;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DestinationDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub category_id: i32,
    /// Joined from the category row for display; empty only if the
    /// category disappeared mid-query.
    pub category_name: String,
    pub summary: String,
    /// Markdown body.
    pub description: String,
    pub main_image: Option<String>,
    pub hero_image: Option<String>,
    pub featured: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateDestinationDto {
    pub name: String,
    pub category_id: i32,
    pub summary: String,
    pub description: String,
    pub main_image: Option<String>,
    pub hero_image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Partial update. The slug is derived once at creation and is not
/// regenerated on rename.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateDestinationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable_patch"
    )]
    pub main_image: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable_patch"
    )]
    pub hero_image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Filters accepted by the destination list endpoint. All optional and
/// freely combinable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DestinationFilterDto {
    pub category_id: Option<i32>,
    pub featured: Option<bool>,
    /// Substring match across name and description.
    pub q: Option<String>,
}
