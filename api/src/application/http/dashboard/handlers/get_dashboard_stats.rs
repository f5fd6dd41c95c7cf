use axum::extract::State;
use nutriscan_core::domain::dashboard::{ports::DashboardService, value_objects::DashboardStats};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/stats",
    tag = "dashboard",
    summary = "Get dashboard statistics",
    description = "Detection and catalog counts, 30-day nutrition averages, a 14-day daily chart and the latest detections.",
    responses(
        (status = 200, body = DashboardStats)
    )
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Response<DashboardStats>, ApiError> {
    state
        .service
        .dashboard_stats()
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
