use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    daily_menu::entities::{MatchedDailyMenu, PortionSize},
    nutrition::entities::{DetectedItem, NutritionCalculation, TotalNutrition},
};

/// Persisted summary of one analysed tray photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Detection {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub image_url: Option<String>,
    pub foodtray_count: i32,
    pub menu_count: i32,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbohydrates: f64,
    pub total_fat: f64,
    pub total_fiber: f64,
    pub matched_menu_name: Option<String>,
    pub matched_portion: Option<PortionSize>,
    pub notes: Option<String>,
    pub detected_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DetectionConfig {
    pub user_id: Option<Uuid>,
    pub image_url: Option<String>,
    pub foodtray_count: i32,
    pub menu_count: i32,
    pub totals: TotalNutrition,
    pub matched_menu: Option<MatchedDailyMenu>,
    pub notes: Option<String>,
}

impl Detection {
    pub fn new(config: DetectionConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            image_url: config.image_url,
            foodtray_count: config.foodtray_count,
            menu_count: config.menu_count,
            total_calories: config.totals.calories,
            total_protein: config.totals.protein,
            total_carbohydrates: config.totals.carbohydrates,
            total_fat: config.totals.fat,
            total_fiber: config.totals.fiber,
            matched_menu_name: config
                .matched_menu
                .as_ref()
                .map(|menu| menu.menu_name.clone()),
            matched_portion: config.matched_menu.as_ref().map(|menu| menu.closest_portion),
            notes: config.notes,
            detected_at: now,
            created_at: now,
        }
    }

    pub fn totals(&self) -> TotalNutrition {
        TotalNutrition {
            calories: self.total_calories,
            protein: self.total_protein,
            carbohydrates: self.total_carbohydrates,
            fat: self.total_fat,
            fiber: self.total_fiber,
        }
    }
}

/// One nutrition line of a persisted detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectionItem {
    pub id: Uuid,
    pub detection_id: Uuid,
    pub item_index: i32,
    pub food_nutrition_id: Option<Uuid>,
    pub food_name: String,
    pub matched_food_name: Option<String>,
    pub confidence: f64,
    pub estimated_weight_gram: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub bbox_x1: f64,
    pub bbox_y1: f64,
    pub bbox_x2: f64,
    pub bbox_y2: f64,
    pub created_at: DateTime<Utc>,
}

impl DetectionItem {
    pub fn new(detection_id: Uuid, item_index: i32, calculation: &NutritionCalculation) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            detection_id,
            item_index,
            food_nutrition_id: calculation.food_nutrition_id,
            food_name: calculation.food_name.clone(),
            matched_food_name: calculation.matched_food_name.clone(),
            confidence: calculation.confidence,
            estimated_weight_gram: calculation.estimated_weight_gram,
            calories: calculation.calories,
            protein: calculation.protein,
            carbohydrates: calculation.carbohydrates,
            fat: calculation.fat,
            fiber: calculation.fiber,
            bbox_x1: calculation.bbox.x1,
            bbox_y1: calculation.bbox.y1,
            bbox_x2: calculation.bbox.x2,
            bbox_y2: calculation.bbox.y2,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectionWithItems {
    pub detection: Detection,
    pub items: Vec<DetectionItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectionGroup {
    pub detected: bool,
    pub count: i32,
    #[serde(default)]
    pub detections: Vec<DetectedItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectionSummary {
    pub total_detections: i32,
    #[serde(default)]
    pub foodtray_types: Vec<String>,
    #[serde(default)]
    pub food_items: Vec<String>,
}

/// Payload returned by the object-detection service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectorResponse {
    pub success: bool,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub image_info: ImageInfo,
    #[serde(default)]
    pub foodtray: DetectionGroup,
    #[serde(default)]
    pub menu: DetectionGroup,
    #[serde(default)]
    pub summary: DetectionSummary,
    #[serde(default)]
    pub error: Option<String>,
}

/// Nutrition estimate for a set of detections, before anything is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionEstimate {
    pub nutrition_items: Vec<NutritionCalculation>,
    pub nutrition_totals: TotalNutrition,
    pub matched_menu: Option<MatchedDailyMenu>,
}

/// Outcome of analysing and storing one tray photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrayAnalysis {
    pub detection: Detection,
    pub image_info: ImageInfo,
    pub foodtray: DetectionGroup,
    pub summary: DetectionSummary,
    pub nutrition_items: Vec<NutritionCalculation>,
    pub nutrition_totals: TotalNutrition,
    pub matched_menu: Option<MatchedDailyMenu>,
}
