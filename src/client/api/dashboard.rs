use crate::{
    client::model::error::ApiError,
    model::dashboard::{DashboardResponseDto, DashboardStatsDto},
};

use super::helper::{get, parse_response, send_request};

/// The dashboard aggregation. The payload arrives flattened beside the
/// success flag rather than under `data`, so this parses the raw body.
pub async fn get_dashboard_stats() -> Result<DashboardStatsDto, ApiError> {
    let response = send_request(get("/api/dashboard/stats")).await?;

    let body: DashboardResponseDto = parse_response(response).await?;
    Ok(body.stats)
}
