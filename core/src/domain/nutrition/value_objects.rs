use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::round_to,
    nutrition::entities::{BoundingBox, NutritionCalculation, TotalNutrition},
};

/// Box area that corresponds to `REFERENCE_WEIGHT_GRAM`.
pub const REFERENCE_AREA_PX: f64 = 40_000.0;
pub const REFERENCE_WEIGHT_GRAM: f64 = 150.0;
pub const MIN_ESTIMATED_WEIGHT_GRAM: f64 = 10.0;
pub const MAX_ESTIMATED_WEIGHT_GRAM: f64 = 500.0;

/// Catalog values are expressed per this many grams.
pub const NUTRIENT_BASE_GRAM: f64 = 100.0;

/// Linear weight estimate from box area, clamped to a plausible serving.
pub fn estimate_weight_from_bbox(bbox: &BoundingBox) -> f64 {
    let estimated = bbox.area() / REFERENCE_AREA_PX * REFERENCE_WEIGHT_GRAM;
    estimated.clamp(MIN_ESTIMATED_WEIGHT_GRAM, MAX_ESTIMATED_WEIGHT_GRAM)
}

pub fn scale_nutrient(per_100g: f64, weight_gram: f64) -> f64 {
    round_to(per_100g * weight_gram / NUTRIENT_BASE_GRAM, 2)
}

/// Detector class names use `_` or `-` where catalog names use spaces.
pub fn normalize_food_label(label: &str) -> String {
    label.replace(['_', '-'], " ")
}

pub fn sum_nutrition(items: &[NutritionCalculation]) -> TotalNutrition {
    let sum = items.iter().fold(TotalNutrition::default(), |acc, item| {
        TotalNutrition {
            calories: acc.calories + item.calories,
            protein: acc.protein + item.protein,
            carbohydrates: acc.carbohydrates + item.carbohydrates,
            fat: acc.fat + item.fat,
            fiber: acc.fiber + item.fiber,
        }
    });

    TotalNutrition {
        calories: round_to(sum.calories, 2),
        protein: round_to(sum.protein, 2),
        carbohydrates: round_to(sum.carbohydrates, 2),
        fat: round_to(sum.fat, 2),
        fiber: round_to(sum.fiber, 2),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateFoodNutritionInput {
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub reference_weight_gram: f64,
}

impl CreateFoodNutritionInput {
    /// Zeroed nutrients on a 100 g reference.
    pub fn named(food_name: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
            calories: 0.0,
            protein: 0.0,
            carbohydrates: 0.0,
            fat: 0.0,
            fiber: 0.0,
            sugar: 0.0,
            sodium: 0.0,
            reference_weight_gram: NUTRIENT_BASE_GRAM,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateFoodNutritionInput {
    pub food_name: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
    pub reference_weight_gram: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetFoodNutritionFilter {
    pub search: Option<String>,
}

/// Rejects negative or non-finite nutrient amounts.
pub fn validate_nutrient_amounts(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite() && *v >= 0.0)
}
