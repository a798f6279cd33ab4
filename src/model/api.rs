use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Success envelope wrapping every API payload as `{ "ok": true, "data": … }`.
///
/// Endpoints never return bare top-level arrays; callers can always rely on
/// this one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct Envelope<T> {
    pub ok: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Error envelope: `{ "ok": false, "message": … }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    pub ok: bool,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Deserializes a field that distinguishes "absent" from "explicitly null".
///
/// Use together with `#[serde(default)]` on an `Option<Option<T>>` field:
/// a missing key stays `None`, `null` becomes `Some(None)` (clear the stored
/// value), and a value becomes `Some(Some(v))` (overwrite).
pub fn nullable_patch<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable_patch")]
        image: Option<Option<String>>,
    }

    #[test]
    fn absent_field_stays_none() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.image, None);
    }

    #[test]
    fn explicit_null_clears() {
        let patch: Patch = serde_json::from_str(r#"{"image": null}"#).unwrap();
        assert_eq!(patch.image, Some(None));
    }

    #[test]
    fn value_overwrites() {
        let patch: Patch = serde_json::from_str(r#"{"image": "a.png"}"#).unwrap();
        assert_eq!(patch.image, Some(Some("a.png".to_string())));
    }
}
