use super::handlers::{
    delete_detection::{__path_delete_detection, delete_detection},
    detect_tray::{__path_detect_tray, detect_tray},
    estimate_nutrition::{__path_estimate_nutrition, estimate_nutrition},
    get_detection::{__path_get_detection, get_detection},
    list_detections::{__path_list_detections, list_detections},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

/// Room for multipart boundaries and the `notes` field on top of the image.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(
    detect_tray,
    estimate_nutrition,
    list_detections,
    get_detection,
    delete_detection
))]
pub struct DetectionApiDoc;

pub fn detection_routes(state: AppState) -> Router<AppState> {
    let body_limit = state.args.detector.max_image_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route(
            &format!("{}/detect", state.args.server.root_path),
            post(detect_tray).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            &format!("{}/nutrition/estimate", state.args.server.root_path),
            post(estimate_nutrition),
        )
        .route(
            &format!("{}/detections", state.args.server.root_path),
            get(list_detections),
        )
        .route(
            &format!("{}/detections/{{id}}", state.args.server.root_path),
            get(get_detection).delete(delete_detection),
        )
}
