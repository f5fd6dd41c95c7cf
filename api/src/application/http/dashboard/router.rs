use super::handlers::get_dashboard_stats::{__path_get_dashboard_stats, get_dashboard_stats};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_dashboard_stats))]
pub struct DashboardApiDoc;

pub fn dashboard_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/dashboard/stats", state.args.server.root_path),
        get(get_dashboard_stats),
    )
}
