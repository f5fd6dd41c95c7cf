use axum::extract::{Path, State};
use nutriscan_core::domain::nutrition::ports::NutritionService;
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
    path = "/{id}",
    tag = "nutrition",
    summary = "Remove a food from the catalog",
    description = "Stored detection items keep their values and lose the catalog link.",
    params(
        ("id" = Uuid, Path, description = "Food nutrition ID"),
    ),
    responses(
        (status = 204, description = "Food deleted"),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn delete_food_nutrition(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_food_nutrition(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
