use nutriscan_core::domain::{
    common::value_objects::OffsetLimit,
    nutrition::value_objects::{
        CreateFoodNutritionInput, GetFoodNutritionFilter, NUTRIENT_BASE_GRAM,
        UpdateFoodNutritionInput,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_reference_weight() -> f64 {
    NUTRIENT_BASE_GRAM
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateFoodNutritionValidator {
    #[validate(length(min = 1, max = 100, message = "food_name must be 1 to 100 characters"))]
    pub food_name: String,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "calories must be >= 0"))]
    pub calories: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "protein must be >= 0"))]
    pub protein: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "carbohydrates must be >= 0"))]
    pub carbohydrates: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "fat must be >= 0"))]
    pub fat: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "fiber must be >= 0"))]
    pub fiber: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "sugar must be >= 0"))]
    pub sugar: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "sodium must be >= 0"))]
    pub sodium: f64,

    #[serde(default = "default_reference_weight")]
    #[validate(range(exclusive_min = 0.0, message = "reference_weight_gram must be > 0"))]
    pub reference_weight_gram: f64,
}

impl From<CreateFoodNutritionValidator> for CreateFoodNutritionInput {
    fn from(payload: CreateFoodNutritionValidator) -> Self {
        Self {
            food_name: payload.food_name,
            calories: payload.calories,
            protein: payload.protein,
            carbohydrates: payload.carbohydrates,
            fat: payload.fat,
            fiber: payload.fiber,
            sugar: payload.sugar,
            sodium: payload.sodium,
            reference_weight_gram: payload.reference_weight_gram,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateFoodNutritionValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "food_name must be 1 to 100 characters"))]
    pub food_name: Option<String>,

    #[serde(default)]
    pub calories: Option<f64>,

    #[serde(default)]
    pub protein: Option<f64>,

    #[serde(default)]
    pub carbohydrates: Option<f64>,

    #[serde(default)]
    pub fat: Option<f64>,

    #[serde(default)]
    pub fiber: Option<f64>,

    #[serde(default)]
    pub sugar: Option<f64>,

    #[serde(default)]
    pub sodium: Option<f64>,

    #[serde(default)]
    pub reference_weight_gram: Option<f64>,
}

impl From<UpdateFoodNutritionValidator> for UpdateFoodNutritionInput {
    fn from(payload: UpdateFoodNutritionValidator) -> Self {
        Self {
            food_name: payload.food_name,
            calories: payload.calories,
            protein: payload.protein,
            carbohydrates: payload.carbohydrates,
            fat: payload.fat,
            fiber: payload.fiber,
            sugar: payload.sugar,
            sodium: payload.sodium,
            reference_weight_gram: payload.reference_weight_gram,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListFoodNutritionQuery {
    /// Case-insensitive fragment of the food name.
    pub search: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl ListFoodNutritionQuery {
    pub fn filter(&self) -> GetFoodNutritionFilter {
        GetFoodNutritionFilter {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    pub fn pagination(&self) -> OffsetLimit {
        let defaults = OffsetLimit::default();
        OffsetLimit::new(
            self.offset.unwrap_or(defaults.offset),
            self.limit.unwrap_or(defaults.limit),
        )
    }
}
