use axum::extract::State;
use nutriscan_core::domain::nutrition::{entities::FoodNutrition, ports::NutritionService};

use crate::application::http::{
    nutrition::validators::CreateFoodNutritionValidator,
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
    path = "",
    tag = "nutrition",
    summary = "Add a food to the catalog",
    description = "Nutrient amounts are per `reference_weight_gram`, 100 g unless given.",
    request_body = CreateFoodNutritionValidator,
    responses(
        (status = 201, body = FoodNutrition),
        (status = 400, body = ApiErrorResponse),
        (status = 409, description = "A food with that name exists", body = ApiErrorResponse)
    )
)]
pub async fn create_food_nutrition(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateFoodNutritionValidator>,
) -> Result<Response<FoodNutrition>, ApiError> {
    let food = state
        .service
        .create_food_nutrition(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(food))
}
