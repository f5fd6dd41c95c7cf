use axum::extract::{Path, State};
use nutriscan_core::domain::daily_menu::{entities::DailyMenu, ports::DailyMenuService};

use crate::application::http::{
    daily_menu::validators::UpdateDailyMenuValidator,
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
    path = "/{name}",
    tag = "daily-menu",
    summary = "Update a daily menu",
    description = "Items and image apply to both portions; nutrient changes apply to the named portion only.",
    params(
        ("name" = String, Path, description = "Menu name"),
    ),
    request_body = UpdateDailyMenuValidator,
    responses(
        (status = 200, body = DailyMenu),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn update_daily_menu(
    Path(name): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateDailyMenuValidator>,
) -> Result<Response<DailyMenu>, ApiError> {
    state
        .service
        .update_daily_menu(name, payload.into())
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
