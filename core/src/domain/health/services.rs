use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    daily_menu::ports::DailyMenuRepository,
    dashboard::ports::DashboardStatsRepository,
    detection::ports::{DetectionRepository, FoodDetector},
    health::{
        entities::ReadinessReport,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    nutrition::ports::FoodNutritionRepository,
};

impl<FN, DM, D, DT, HC, DS> HealthCheckService for Service<FN, DM, D, DT, HC, DS>
where
    FN: FoodNutritionRepository,
    DM: DailyMenuRepository,
    D: DetectionRepository,
    DT: FoodDetector,
    HC: HealthCheckRepository,
    DS: DashboardStatsRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }

    async fn readiness(&self) -> Result<ReadinessReport, CoreError> {
        let database = self.health_check_repository.readiness().await?;
        let detector_available = self.food_detector.is_healthy().await;

        Ok(ReadinessReport {
            ready: database.status == "UP" && detector_available,
            database,
            detector_available,
        })
    }
}
