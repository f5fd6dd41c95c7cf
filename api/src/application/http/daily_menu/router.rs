use super::handlers::{
    list_daily_menus::{__path_list_daily_menus, list_daily_menus},
    match_daily_menu::{__path_match_daily_menu, match_daily_menu},
    update_daily_menu::{__path_update_daily_menu, update_daily_menu},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_daily_menus, match_daily_menu, update_daily_menu))]
pub struct DailyMenuApiDoc;

pub fn daily_menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/menus", state.args.server.root_path),
            get(list_daily_menus),
        )
        .route(
            &format!("{}/menus/match", state.args.server.root_path),
            post(match_daily_menu),
        )
        .route(
            &format!("{}/menus/{{name}}", state.args.server.root_path),
            put(update_daily_menu),
        )
}
