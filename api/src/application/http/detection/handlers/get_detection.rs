use axum::extract::{Path, State};
use nutriscan_core::domain::detection::{entities::DetectionWithItems, ports::DetectionService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/detections/{id}",
    tag = "detection",
    summary = "Get a detection with its items",
    params(
        ("id" = Uuid, Path, description = "Detection ID"),
    ),
    responses(
        (status = 200, body = DetectionWithItems),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn get_detection(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DetectionWithItems>, ApiError> {
    state
        .service
        .get_detection(id)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
