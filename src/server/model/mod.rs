//! Operation parameter types and entity-to-DTO conversions.
//!
//! Create/update operations travel through typed params objects: update
//! params hold `Option<T>` per field (images `Option<Option<String>>`) and
//! repositories translate only the present fields into `ActiveValue::Set`,
//! so an omitted field can never overwrite stored data.

pub mod banner;
pub mod category;
pub mod destination;
pub mod event;
pub mod favorite;
pub mod gallery;
pub mod service;
pub mod user;
