//! Optional-table detection.
//!
//! The `visit` and `service_usage` logs are provisioned out-of-band by the
//! analytics pipeline and may be absent in a deployment. Their availability
//! is probed once at startup and carried in `AppState`; request handlers
//! branch on the flags instead of catching per-request query failures,
//! which would also mask genuine query errors as "table absent".

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect};

#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub visits: bool,
    pub service_usage: bool,
}

impl Capabilities {
    pub async fn detect(db: &DatabaseConnection) -> Self {
        let visits = table_available::<entity::prelude::Visit>(db, "visit").await;
        let service_usage =
            table_available::<entity::prelude::ServiceUsage>(db, "service_usage").await;

        Self {
            visits,
            service_usage,
        }
    }

    /// All optional tables present; used by tests and diagnostics.
    pub fn full() -> Self {
        Self {
            visits: true,
            service_usage: true,
        }
    }

    pub fn none() -> Self {
        Self {
            visits: false,
            service_usage: false,
        }
    }
}

async fn table_available<E: EntityTrait>(db: &DatabaseConnection, table: &str) -> bool {
    match E::find().limit(1).all(db).await {
        Ok(_) => true,
        Err(err) => {
            tracing::info!("Optional table '{table}' unavailable, metrics degrade to zero: {err}");
            false
        }
    }
}
