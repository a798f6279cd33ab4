//! Aggregation queries backing the admin dashboard.
//!
//! Group-bys are pushed into SQL; label mapping and zero-filling happen in
//! the service layer. Queries against the optional `visit` and
//! `service_usage` tables must only run when the corresponding capability
//! flag is set.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct DashboardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn count_categories(&self) -> Result<u64, DbErr> {
        entity::prelude::Category::find().count(self.db).await
    }

    pub async fn count_destinations(&self) -> Result<u64, DbErr> {
        entity::prelude::Destination::find().count(self.db).await
    }

    pub async fn count_services(&self) -> Result<u64, DbErr> {
        entity::prelude::Service::find().count(self.db).await
    }

    pub async fn count_events(&self) -> Result<u64, DbErr> {
        entity::prelude::Event::find().count(self.db).await
    }

    pub async fn count_users(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Destination counts grouped by category id.
    pub async fn destination_counts_by_category(&self) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::Destination::find()
            .select_only()
            .column(entity::destination::Column::CategoryId)
            .column_as(
                entity::destination::Column::Id.count(),
                "count",
            )
            .group_by(entity::destination::Column::CategoryId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }

    /// User counts grouped by role, as the stored role string.
    pub async fn user_counts_by_role(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Role)
            .column_as(entity::user::Column::Id.count(), "count")
            .group_by(entity::user::Column::Role)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }

    /// Registrations per calendar month, oldest first, as `YYYY-MM` labels.
    pub async fn user_counts_by_month(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column_as(Expr::cust("strftime('%Y-%m', created_at)"), "month")
            .column_as(entity::user::Column::Id.count(), "count")
            .group_by(Expr::cust("strftime('%Y-%m', created_at)"))
            .order_by_asc(Expr::cust("strftime('%Y-%m', created_at)"))
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }

    /// Visits per calendar day since the cutoff, as `YYYY-MM-DD` labels.
    pub async fn visit_counts_by_day(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::Visit::find()
            .filter(entity::visit::Column::VisitedAt.gte(since))
            .select_only()
            .column_as(Expr::cust("strftime('%Y-%m-%d', visited_at)"), "day")
            .column_as(entity::visit::Column::Id.count(), "count")
            .group_by(Expr::cust("strftime('%Y-%m-%d', visited_at)"))
            .order_by_asc(Expr::cust("strftime('%Y-%m-%d', visited_at)"))
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }

    /// Visit counts grouped by destination id.
    pub async fn visit_counts_by_destination(&self) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::Visit::find()
            .select_only()
            .column(entity::visit::Column::DestinationId)
            .column_as(entity::visit::Column::Id.count(), "count")
            .group_by(entity::visit::Column::DestinationId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }

    /// Usage counts grouped by service id.
    pub async fn usage_counts_by_service(&self) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::ServiceUsage::find()
            .select_only()
            .column(entity::service_usage::Column::ServiceId)
            .column_as(entity::service_usage::Column::Id.count(), "count")
            .group_by(entity::service_usage::Column::ServiceId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }

    /// `(destination id, category id)` pairs for rolling visit counts up to
    /// categories without a two-hop SQL join.
    pub async fn destination_category_pairs(&self) -> Result<Vec<(i32, i32)>, DbErr> {
        entity::prelude::Destination::find()
            .select_only()
            .column(entity::destination::Column::Id)
            .column(entity::destination::Column::CategoryId)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await
    }
}
