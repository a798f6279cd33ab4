use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardResponseDto},
    server::{error::AppError, service::dashboard::DashboardService, state::AppState},
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Admin dashboard aggregation: five counts and six chart series.
///
/// The stats are flattened beside the success flag rather than nested under
/// `data`; the dashboard renderer binds to that flat shape. Series backed
/// by optional analytics tables degrade to zero-filled series when the
/// deployment lacks them.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = DashboardService::new(&state.db, state.capabilities)
        .stats()
        .await?;

    Ok((
        StatusCode::OK,
        Json(DashboardResponseDto { ok: true, stats }),
    ))
}
