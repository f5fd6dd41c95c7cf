use crate::application::http::{
    daily_menu::router::DailyMenuApiDoc, dashboard::router::DashboardApiDoc,
    detection::router::DetectionApiDoc, health::router::HealthApiDoc,
    nutrition::router::NutritionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriScan API",
        description = "Food tray detection, nutrition estimation and daily menu matching"
    ),
    nest(
        (path = "/nutrition", api = NutritionApiDoc),
        (path = "/menus", api = DailyMenuApiDoc),
        (path = "/dashboard", api = DashboardApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document. Detection routes live at the root so they are merged, not nested.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(DetectionApiDoc::openapi());
    doc
}
