use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use nutriscan_core::domain::health::{entities::ReadinessReport, ports::HealthCheckService};
use tracing::warn;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Reports database and detector availability. Answers 503 with the same body when either is down.",
    responses(
        (status = 200, body = ReadinessReport),
        (status = 503, body = ReadinessReport)
    )
)]
pub async fn health_ready(State(state): State<AppState>) -> Result<AxumResponse, ApiError> {
    let report = state.service.readiness().await.map_err(ApiError::from)?;

    if !report.ready {
        warn!(
            database = %report.database.database_status,
            detector_available = report.detector_available,
            "service not ready"
        );
        return Ok((StatusCode::SERVICE_UNAVAILABLE, Json(report)).into_response());
    }

    Ok((StatusCode::OK, Json(report)).into_response())
}
