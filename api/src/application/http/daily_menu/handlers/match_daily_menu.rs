use axum::extract::State;
use nutriscan_core::domain::daily_menu::{entities::MatchedDailyMenu, ports::DailyMenuService};

use crate::application::http::{
    daily_menu::validators::MatchDailyMenuValidator,
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
    path = "/match",
    tag = "daily-menu",
    summary = "Match detected labels to a daily menu",
    description = "Returns the best matching menu and its closest portion, or null when no menu reaches the threshold.",
    request_body = MatchDailyMenuValidator,
    responses(
        (status = 200, body = Option<MatchedDailyMenu>),
        (status = 400, body = ApiErrorResponse)
    )
)]
pub async fn match_daily_menu(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MatchDailyMenuValidator>,
) -> Result<Response<Option<MatchedDailyMenu>>, ApiError> {
    state
        .service
        .match_daily_menu(payload.detected_labels, payload.estimated_calories)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
