//! Database repository layer for all domain entities.
//!
//! One repository per domain. Repositories build parameterized SeaORM
//! queries, translate typed patch params into `ActiveValue::Set` for only
//! the fields present, and return entity models to the service layer.

pub mod banner;
pub mod category;
pub mod dashboard;
pub mod destination;
pub mod event;
pub mod favorite;
pub mod gallery;
pub mod service;
pub mod user;

#[cfg(test)]
mod test;
