use crate::domain::{
    daily_menu::ports::DailyMenuRepository,
    dashboard::ports::DashboardStatsRepository,
    detection::ports::{DetectionRepository, FoodDetector},
    health::ports::HealthCheckRepository,
    nutrition::ports::FoodNutritionRepository,
};

/// Holds every outbound port the domain services need.
#[derive(Clone)]
pub struct Service<FN, DM, D, DT, HC, DS>
where
    FN: FoodNutritionRepository,
    DM: DailyMenuRepository,
    D: DetectionRepository,
    DT: FoodDetector,
    HC: HealthCheckRepository,
    DS: DashboardStatsRepository,
{
    pub(crate) food_nutrition_repository: FN,
    pub(crate) daily_menu_repository: DM,
    pub(crate) detection_repository: D,
    pub(crate) food_detector: DT,
    pub(crate) health_check_repository: HC,
    pub(crate) dashboard_stats_repository: DS,
    pub(crate) max_image_bytes: usize,
}

impl<FN, DM, D, DT, HC, DS> Service<FN, DM, D, DT, HC, DS>
where
    FN: FoodNutritionRepository,
    DM: DailyMenuRepository,
    D: DetectionRepository,
    DT: FoodDetector,
    HC: HealthCheckRepository,
    DS: DashboardStatsRepository,
{
    pub fn new(
        food_nutrition_repository: FN,
        daily_menu_repository: DM,
        detection_repository: D,
        food_detector: DT,
        health_check_repository: HC,
        dashboard_stats_repository: DS,
        max_image_bytes: usize,
    ) -> Self {
        Self {
            food_nutrition_repository,
            daily_menu_repository,
            detection_repository,
            food_detector,
            health_check_repository,
            dashboard_stats_repository,
            max_image_bytes,
        }
    }
}
