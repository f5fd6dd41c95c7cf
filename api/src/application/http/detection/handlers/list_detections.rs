use axum::extract::{Query, State};
use nutriscan_core::domain::{
    common::value_objects::Paginated,
    detection::{entities::Detection, ports::DetectionService},
};

use crate::application::http::{
    detection::validators::ListDetectionsQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/detections",
    tag = "detection",
    summary = "List stored detections",
    description = "Newest first, optionally bounded by detection time.",
    params(ListDetectionsQuery),
    responses(
        (status = 200, body = Paginated<Detection>),
        (status = 400, body = ApiErrorResponse)
    )
)]
pub async fn list_detections(
    State(state): State<AppState>,
    Query(query): Query<ListDetectionsQuery>,
) -> Result<Response<Paginated<Detection>>, ApiError> {
    let detections = state
        .service
        .list_detections(query.filter(), query.pagination())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(detections))
}
