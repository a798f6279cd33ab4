use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// A stored upload: the randomized filename persisted on disk plus the full
/// public URL for immediate display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UploadedFileDto {
    pub filename: String,
    pub url: String,
}
