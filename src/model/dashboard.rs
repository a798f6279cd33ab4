use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// One labelled value in a dashboard chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SeriesPointDto {
    pub label: String,
    pub value: i64,
}

/// The dashboard aggregation payload: five scalar counts and six chart
/// series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DashboardStatsDto {
    pub categories: u64,
    pub destinations: u64,
    pub services: u64,
    pub events: u64,
    pub users: u64,
    pub destinations_per_category: Vec<SeriesPointDto>,
    pub recent_activity: Vec<SeriesPointDto>,
    pub users_by_role: Vec<SeriesPointDto>,
    pub monthly_user_growth: Vec<SeriesPointDto>,
    pub category_visits: Vec<SeriesPointDto>,
    pub service_usage: Vec<SeriesPointDto>,
}

/// Wire shape of `GET /api/dashboard/stats`: the success flag plus all
/// eleven stat fields flattened at the top level. The admin dashboard
/// renderer depends on this exact flat layout; do not nest the stats under
/// a `data` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DashboardResponseDto {
    pub ok: bool,
    #[serde(flatten)]
    pub stats: DashboardStatsDto,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stats_flatten_beside_ok_flag() {
        let response = DashboardResponseDto {
            ok: true,
            stats: DashboardStatsDto {
                categories: 2,
                destinations: 3,
                services: 0,
                events: 0,
                users: 1,
                destinations_per_category: vec![SeriesPointDto {
                    label: "Beaches".to_string(),
                    value: 3,
                }],
                recent_activity: vec![],
                users_by_role: vec![],
                monthly_user_growth: vec![],
                category_visits: vec![],
                service_usage: vec![],
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["categories"], 2);
        assert_eq!(json["destinations_per_category"][0]["label"], "Beaches");
        // No nested container key.
        assert!(json.get("data").is_none());
        assert!(json.get("stats").is_none());
    }
}
