use axum::extract::State;
use nutriscan_core::domain::daily_menu::{entities::DailyMenu, ports::DailyMenuService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "daily-menu",
    summary = "List daily menus",
    description = "Each menu with its large and small portion nutrition.",
    responses(
        (status = 200, body = Vec<DailyMenu>)
    )
)]
pub async fn list_daily_menus(
    State(state): State<AppState>,
) -> Result<Response<Vec<DailyMenu>>, ApiError> {
    state
        .service
        .list_daily_menus()
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
