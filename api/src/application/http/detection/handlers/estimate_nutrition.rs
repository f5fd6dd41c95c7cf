use axum::extract::State;
use nutriscan_core::domain::detection::{entities::NutritionEstimate, ports::DetectionService};

use crate::application::http::{
    detection::validators::EstimateNutritionValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/nutrition/estimate",
    tag = "detection",
    summary = "Estimate nutrition for detections",
    description = "Maps already-detected items to catalog nutrition and a daily menu without storing anything.",
    request_body = EstimateNutritionValidator,
    responses(
        (status = 200, body = NutritionEstimate),
        (status = 400, body = ApiErrorResponse)
    )
)]
pub async fn estimate_nutrition(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<EstimateNutritionValidator>,
) -> Result<Response<NutritionEstimate>, ApiError> {
    state
        .service
        .estimate_nutrition(payload.detections)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
