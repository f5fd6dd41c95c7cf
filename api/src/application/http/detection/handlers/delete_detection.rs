use axum::extract::{Path, State};
use nutriscan_core::domain::detection::ports::DetectionService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/detections/{id}",
    tag = "detection",
    summary = "Delete a detection",
    description = "Removes the detection and its items.",
    params(
        ("id" = Uuid, Path, description = "Detection ID"),
    ),
    responses(
        (status = 204, description = "Detection deleted"),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn delete_detection(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_detection(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
