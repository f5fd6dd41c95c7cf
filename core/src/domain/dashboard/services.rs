use chrono::{Duration, Utc};
use futures::try_join;
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    daily_menu::ports::DailyMenuRepository,
    dashboard::{
        ports::{DashboardService, DashboardStatsRepository},
        value_objects::{
            AVERAGE_WINDOW_DAYS, CHART_WINDOW_DAYS, DashboardStats, DashboardSummary,
            RECENT_DETECTIONS_LIMIT,
        },
    },
    detection::ports::{DetectionRepository, FoodDetector},
    health::ports::HealthCheckRepository,
    nutrition::ports::FoodNutritionRepository,
};

impl<FN, DM, D, DT, HC, DS> DashboardService for Service<FN, DM, D, DT, HC, DS>
where
    FN: FoodNutritionRepository,
    DM: DailyMenuRepository,
    D: DetectionRepository,
    DT: FoodDetector,
    HC: HealthCheckRepository,
    DS: DashboardStatsRepository,
{
    #[instrument(skip(self))]
    async fn dashboard_stats(&self) -> Result<DashboardStats, CoreError> {
        let now = Utc::now();
        let repository = &self.dashboard_stats_repository;

        let (total_detections, total_nutrition_records, averages, daily_chart, recent_detections) =
            try_join!(
                repository.count_detections(),
                repository.count_food_nutrition(),
                repository.average_totals_since(now - Duration::days(AVERAGE_WINDOW_DAYS)),
                repository.daily_totals_since(now - Duration::days(CHART_WINDOW_DAYS)),
                repository.recent_detections(RECENT_DETECTIONS_LIMIT),
            )?;

        Ok(DashboardStats {
            summary: DashboardSummary {
                total_detections,
                total_nutrition_records,
                averages: averages.rounded(),
            },
            daily_chart,
            recent_detections,
        })
    }
}
