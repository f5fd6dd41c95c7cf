use crate::{
    domain::common::{NutriscanConfig, services::Service},
    infrastructure::{
        daily_menu::repositories::daily_menu_repository::PostgresDailyMenuRepository,
        dashboard::repositories::dashboard_stats_repository::PostgresDashboardStatsRepository,
        db::postgres::{Postgres, PostgresConfig},
        detection::repositories::detection_repository::PostgresDetectionRepository,
        detector::http_detector::HttpFoodDetector,
        health::repositories::health_check_repository::PostgresHealthCheckRepository,
        nutrition::repositories::food_nutrition_repository::PostgresFoodNutritionRepository,
    },
};

pub type NutriscanService = Service<
    PostgresFoodNutritionRepository,
    PostgresDailyMenuRepository,
    PostgresDetectionRepository,
    HttpFoodDetector,
    PostgresHealthCheckRepository,
    PostgresDashboardStatsRepository,
>;

pub async fn create_service(config: NutriscanConfig) -> Result<NutriscanService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    let db = postgres.get_db();

    let food_detector = HttpFoodDetector::new(&config.detector)?;

    Ok(Service::new(
        PostgresFoodNutritionRepository::new(db.clone()),
        PostgresDailyMenuRepository::new(db.clone()),
        PostgresDetectionRepository::new(db.clone()),
        food_detector,
        PostgresHealthCheckRepository::new(db.clone()),
        PostgresDashboardStatsRepository::new(db),
        config.detector.max_image_bytes,
    ))
}
