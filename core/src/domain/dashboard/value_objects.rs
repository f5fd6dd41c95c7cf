use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::round_to;

pub const AVERAGE_WINDOW_DAYS: i64 = 30;
pub const CHART_WINDOW_DAYS: i64 = 14;
pub const RECENT_DETECTIONS_LIMIT: u64 = 5;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NutritionAverages {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}

impl NutritionAverages {
    pub fn rounded(&self) -> Self {
        Self {
            calories: round_to(self.calories, 2),
            protein: round_to(self.protein, 2),
            carbohydrates: round_to(self.carbohydrates, 2),
            fat: round_to(self.fat, 2),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DailyNutritionStats {
    pub date: String, // YYYY-MM-DD
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbohydrates: f64,
    pub total_fat: f64,
    pub detection_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecentDetection {
    pub id: Uuid,
    pub menu_count: i32,
    pub total_calories: f64,
    pub detected_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DashboardSummary {
    pub total_detections: i64,
    pub total_nutrition_records: i64,
    /// Over the last 30 days.
    pub averages: NutritionAverages,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DashboardStats {
    pub summary: DashboardSummary,
    pub daily_chart: Vec<DailyNutritionStats>,
    pub recent_detections: Vec<RecentDetection>,
}
