//! Dashboard aggregation.
//!
//! Builds the five counts and six chart series. Series backed by the
//! optional analytics tables consult the startup capability flags: when a
//! table is absent the series is zero-filled from the rows that do exist,
//! so the dashboard always carries every field.

use std::collections::HashMap;

use chrono::{Duration, NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{DashboardStatsDto, SeriesPointDto},
    server::{
        capabilities::Capabilities,
        data::{
            category::CategoryRepository, dashboard::DashboardRepository,
            service::ServiceRepository,
        },
        error::AppError,
    },
};

const ACTIVITY_WINDOW_DAYS: i64 = 7;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
    capabilities: Capabilities,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection, capabilities: Capabilities) -> Self {
        Self { db, capabilities }
    }

    pub async fn stats(&self) -> Result<DashboardStatsDto, AppError> {
        let repo = DashboardRepository::new(self.db);

        let categories = CategoryRepository::new(self.db).get_all().await?;
        let services = ServiceRepository::new(self.db).get_all(None, None).await?;

        let destinations_per_category = {
            let counts: HashMap<i32, i64> = repo
                .destination_counts_by_category()
                .await?
                .into_iter()
                .collect();

            categories
                .iter()
                .map(|category| SeriesPointDto {
                    label: category.name.clone(),
                    value: counts.get(&category.id).copied().unwrap_or(0),
                })
                .collect()
        };

        let users_by_role = {
            let counts: HashMap<String, i64> =
                repo.user_counts_by_role().await?.into_iter().collect();

            ["user", "admin"]
                .into_iter()
                .map(|role| SeriesPointDto {
                    label: role.to_string(),
                    value: counts.get(role).copied().unwrap_or(0),
                })
                .collect()
        };

        let monthly_user_growth = repo
            .user_counts_by_month()
            .await?
            .into_iter()
            .map(|(label, value)| SeriesPointDto { label, value })
            .collect();

        let day_labels = last_days(ACTIVITY_WINDOW_DAYS);
        let recent_activity = if self.capabilities.visits {
            let since = (Utc::now().date_naive() - Duration::days(ACTIVITY_WINDOW_DAYS - 1))
                .and_time(NaiveTime::MIN)
                .and_utc();
            let counts: HashMap<String, i64> =
                repo.visit_counts_by_day(since).await?.into_iter().collect();

            day_labels
                .into_iter()
                .map(|day| SeriesPointDto {
                    value: counts.get(&day).copied().unwrap_or(0),
                    label: day,
                })
                .collect()
        } else {
            zero_series(day_labels)
        };

        let category_visits = if self.capabilities.visits {
            let by_destination: HashMap<i32, i64> = repo
                .visit_counts_by_destination()
                .await?
                .into_iter()
                .collect();

            let mut by_category: HashMap<i32, i64> = HashMap::new();
            for (destination_id, category_id) in repo.destination_category_pairs().await? {
                if let Some(count) = by_destination.get(&destination_id) {
                    *by_category.entry(category_id).or_insert(0) += count;
                }
            }

            categories
                .iter()
                .map(|category| SeriesPointDto {
                    label: category.name.clone(),
                    value: by_category.get(&category.id).copied().unwrap_or(0),
                })
                .collect()
        } else {
            zero_series(categories.iter().map(|category| category.name.clone()))
        };

        let service_usage = if self.capabilities.service_usage {
            let counts: HashMap<i32, i64> =
                repo.usage_counts_by_service().await?.into_iter().collect();

            services
                .iter()
                .map(|(service, _)| SeriesPointDto {
                    label: service.name.clone(),
                    value: counts.get(&service.id).copied().unwrap_or(0),
                })
                .collect()
        } else {
            zero_series(services.iter().map(|(service, _)| service.name.clone()))
        };

        Ok(DashboardStatsDto {
            categories: repo.count_categories().await?,
            destinations: repo.count_destinations().await?,
            services: repo.count_services().await?,
            events: repo.count_events().await?,
            users: repo.count_users().await?,
            destinations_per_category,
            recent_activity,
            users_by_role,
            monthly_user_growth,
            category_visits,
            service_usage,
        })
    }
}

/// The last `n` calendar days as `YYYY-MM-DD` labels, oldest first.
fn last_days(n: i64) -> Vec<String> {
    let today = Utc::now().date_naive();

    (0..n)
        .rev()
        .map(|offset| (today - Duration::days(offset)).format("%Y-%m-%d").to_string())
        .collect()
}

fn zero_series(labels: impl IntoIterator<Item = String>) -> Vec<SeriesPointDto> {
    labels
        .into_iter()
        .map(|label| SeriesPointDto { label, value: 0 })
        .collect()
}
