use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    nutrition::value_objects::{CreateFoodNutritionInput, scale_nutrient},
};

/// Rectangle delimiting a detected object, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            width: None,
            height: None,
        }
    }

    /// Pixel area. Explicit width and height win over corner coordinates
    /// only when both are present.
    pub fn area(&self) -> f64 {
        match (self.width, self.height) {
            (Some(width), Some(height)) => width * height,
            _ => (self.x2 - self.x1) * (self.y2 - self.y1),
        }
    }

    /// Same box without the optional dimensions, as persisted.
    pub fn corners(&self) -> Self {
        Self::new(self.x1, self.y1, self.x2, self.y2)
    }
}

/// One object reported by the detection service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectedItem {
    #[serde(alias = "class")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<i32>,
    pub confidence: f64,
    pub bbox: BoundingBox,
}

/// Five macro nutrients. Catalog records express them per 100 g, daily
/// menu portions and calculations carry absolute amounts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct NutrientProfile {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl NutrientProfile {
    pub fn scaled_to(&self, weight_gram: f64) -> Self {
        Self {
            calories: scale_nutrient(self.calories, weight_gram),
            protein: scale_nutrient(self.protein, weight_gram),
            carbohydrates: scale_nutrient(self.carbohydrates, weight_gram),
            fat: scale_nutrient(self.fat, weight_gram),
            fiber: scale_nutrient(self.fiber, weight_gram),
        }
    }
}

/// Catalog record for a single food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodNutrition {
    pub id: Uuid,
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub reference_weight_gram: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FoodNutrition {
    pub fn new(input: CreateFoodNutritionInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            food_name: input.food_name,
            calories: input.calories,
            protein: input.protein,
            carbohydrates: input.carbohydrates,
            fat: input.fat,
            fiber: input.fiber,
            sugar: input.sugar,
            sodium: input.sodium,
            reference_weight_gram: input.reference_weight_gram,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn profile(&self) -> NutrientProfile {
        NutrientProfile {
            calories: self.calories,
            protein: self.protein,
            carbohydrates: self.carbohydrates,
            fat: self.fat,
            fiber: self.fiber,
        }
    }
}

/// Nutrition estimated for one detected item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionCalculation {
    pub food_name: String,
    pub matched_food_name: Option<String>,
    pub food_nutrition_id: Option<Uuid>,
    pub estimated_weight_gram: f64,
    pub confidence: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub bbox: BoundingBox,
}

impl NutritionCalculation {
    pub fn nutrients(&self) -> NutrientProfile {
        NutrientProfile {
            calories: self.calories,
            protein: self.protein,
            carbohydrates: self.carbohydrates,
            fat: self.fat,
            fiber: self.fiber,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.matched_food_name.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct TotalNutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_from_corners() {
        let bbox = BoundingBox::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(bbox.area(), 5000.0);
    }

    #[test]
    fn test_area_prefers_explicit_dimensions() {
        let bbox = BoundingBox {
            width: Some(300.0),
            height: Some(200.0),
            ..BoundingBox::new(0.0, 0.0, 10.0, 10.0)
        };
        assert_eq!(bbox.area(), 60000.0);
    }

    #[test]
    fn test_area_ignores_lone_width() {
        let bbox = BoundingBox {
            width: Some(300.0),
            ..BoundingBox::new(0.0, 0.0, 10.0, 10.0)
        };
        assert_eq!(bbox.area(), 100.0);
    }

    #[test]
    fn test_detected_item_accepts_detector_class_field() {
        let item: DetectedItem = serde_json::from_value(serde_json::json!({
            "class": "Nasi",
            "class_id": 3,
            "confidence": 0.91,
            "bbox": { "x1": 0.0, "y1": 0.0, "x2": 200.0, "y2": 200.0, "area": 40000.0 }
        }))
        .unwrap();

        assert_eq!(item.label, "Nasi");
        assert_eq!(item.class_id, Some(3));
        assert_eq!(item.bbox.area(), 40000.0);
    }
}
