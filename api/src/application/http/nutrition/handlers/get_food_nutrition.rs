use axum::extract::{Path, State};
use nutriscan_core::domain::nutrition::{entities::FoodNutrition, ports::NutritionService};
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
    path = "/{id}",
    tag = "nutrition",
    summary = "Get a catalog food",
    params(
        ("id" = Uuid, Path, description = "Food nutrition ID"),
    ),
    responses(
        (status = 200, body = FoodNutrition),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn get_food_nutrition(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<FoodNutrition>, ApiError> {
    state
        .service
        .get_food_nutrition(id)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
