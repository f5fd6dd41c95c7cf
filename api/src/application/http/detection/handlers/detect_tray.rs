use axum::{
    body::Bytes,
    extract::{Multipart, State},
};
use nutriscan_core::domain::detection::{
    entities::TrayAnalysis, ports::DetectionService, value_objects::AnalyzeTrayInput,
};
use tracing::error;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

const DEFAULT_FILENAME: &str = "image.jpg";

#[utoipa::path(
    post,
    path = "/detect",
    tag = "detection",
    summary = "Analyze a food tray image",
    description = "Runs object detection on the uploaded tray photo, estimates nutrition for every detected menu item, matches a daily menu and stores the result.",
    request_body(content_type = "multipart/form-data", description = "`image` file and optional `notes` text"),
    responses(
        (status = 200, body = TrayAnalysis),
        (status = 400, description = "Missing, empty or oversized image", body = ApiErrorResponse),
        (status = 502, description = "Detector failed or unreachable", body = ApiErrorResponse)
    )
)]
pub async fn detect_tray(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<TrayAnalysis>, ApiError> {
    let mut image: Option<(Bytes, String)> = None;
    let mut notes: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "image" => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
                let data = field.bytes().await.map_err(|e| {
                    error!("Failed to read image bytes: {}", e);
                    ApiError::BadRequest(format!("Failed to read image: {}", e))
                })?;
                image = Some((data, filename));
            }
            "notes" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read notes: {}", e)))?;
                let text = text.trim();
                if !text.is_empty() {
                    notes = Some(text.to_string());
                }
            }
            _ => {}
        }
    }

    let (image_data, filename) =
        image.ok_or_else(|| ApiError::BadRequest("No image provided".to_string()))?;

    let analysis = state
        .service
        .analyze_tray(AnalyzeTrayInput {
            image_data,
            filename,
            user_id: None,
            notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analysis))
}
