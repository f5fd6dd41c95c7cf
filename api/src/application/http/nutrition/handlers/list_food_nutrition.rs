use axum::extract::{Query, State};
use nutriscan_core::domain::{
    common::value_objects::Paginated,
    nutrition::{entities::FoodNutrition, ports::NutritionService},
};

use crate::application::http::{
    nutrition::validators::ListFoodNutritionQuery,
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
    path = "",
    tag = "nutrition",
    summary = "List catalog foods",
    description = "Foods sorted by name, optionally filtered by a name fragment.",
    params(ListFoodNutritionQuery),
    responses(
        (status = 200, body = Paginated<FoodNutrition>),
        (status = 400, body = ApiErrorResponse)
    )
)]
pub async fn list_food_nutrition(
    State(state): State<AppState>,
    Query(query): Query<ListFoodNutritionQuery>,
) -> Result<Response<Paginated<FoodNutrition>>, ApiError> {
    let foods = state
        .service
        .list_food_nutrition(query.filter(), query.pagination())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(foods))
}
