use chrono::{DateTime, Utc};
use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dashboard::value_objects::{
        DailyNutritionStats, DashboardStats, NutritionAverages, RecentDetection,
    },
};

/// Aggregate queries over stored detections and the catalog
pub trait DashboardStatsRepository: Send + Sync {
    fn count_detections(&self) -> impl Future<Output = Result<i64, CoreError>> + Send;

    fn count_food_nutrition(&self) -> impl Future<Output = Result<i64, CoreError>> + Send;

    /// Zeroes when nothing was detected since `since`.
    fn average_totals_since(
        &self,
        since: DateTime<Utc>,
    ) -> impl Future<Output = Result<NutritionAverages, CoreError>> + Send;

    /// One entry per calendar day with detections, oldest first.
    fn daily_totals_since(
        &self,
        since: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<DailyNutritionStats>, CoreError>> + Send;

    fn recent_detections(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<RecentDetection>, CoreError>> + Send;
}

pub trait DashboardService: Send + Sync {
    fn dashboard_stats(&self) -> impl Future<Output = Result<DashboardStats, CoreError>> + Send;
}
