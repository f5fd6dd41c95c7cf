use axum::extract::{Path, State};
use nutriscan_core::domain::nutrition::{entities::FoodNutrition, ports::NutritionService};
use uuid::Uuid;

use crate::application::http::{
    nutrition::validators::UpdateFoodNutritionValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "nutrition",
    summary = "Update a catalog food",
    description = "Only the fields present in the body change.",
    params(
        ("id" = Uuid, Path, description = "Food nutrition ID"),
    ),
    request_body = UpdateFoodNutritionValidator,
    responses(
        (status = 200, body = FoodNutrition),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse),
        (status = 409, body = ApiErrorResponse)
    )
)]
pub async fn update_food_nutrition(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateFoodNutritionValidator>,
) -> Result<Response<FoodNutrition>, ApiError> {
    state
        .service
        .update_food_nutrition(id, payload.into())
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
