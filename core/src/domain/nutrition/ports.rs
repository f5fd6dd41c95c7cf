use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        value_objects::{OffsetLimit, Paginated},
    },
    nutrition::{
        entities::{DetectedItem, FoodNutrition, NutritionCalculation},
        value_objects::{CreateFoodNutritionInput, GetFoodNutritionFilter, UpdateFoodNutritionInput},
    },
};

/// Read and write access to the nutrition catalog.
///
/// Name lookups return `Ok(None)` on a miss; an `Err` always means the
/// catalog itself could not be queried.
pub trait FoodNutritionRepository: Send + Sync {
    /// Case-insensitive equality on the food name.
    fn find_by_name_exact(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<FoodNutrition>, CoreError>> + Send;

    /// First record, in catalog order, whose name contains `fragment`
    /// ignoring case.
    fn find_by_name_contains(
        &self,
        fragment: &str,
    ) -> impl Future<Output = Result<Option<FoodNutrition>, CoreError>> + Send;

    fn list(
        &self,
        filter: GetFoodNutritionFilter,
        pagination: OffsetLimit,
    ) -> impl Future<Output = Result<Paginated<FoodNutrition>, CoreError>> + Send;

    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<FoodNutrition>, CoreError>> + Send;

    fn create(
        &self,
        food: FoodNutrition,
    ) -> impl Future<Output = Result<FoodNutrition, CoreError>> + Send;

    fn update(
        &self,
        food: FoodNutrition,
    ) -> impl Future<Output = Result<FoodNutrition, CoreError>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for catalog management and detection mapping
pub trait NutritionService: Send + Sync {
    fn map_detections(
        &self,
        items: Vec<DetectedItem>,
    ) -> impl Future<Output = Result<Vec<NutritionCalculation>, CoreError>> + Send;

    fn lookup_food_nutrition(
        &self,
        label: String,
    ) -> impl Future<Output = Result<Option<FoodNutrition>, CoreError>> + Send;

    fn list_food_nutrition(
        &self,
        filter: GetFoodNutritionFilter,
        pagination: OffsetLimit,
    ) -> impl Future<Output = Result<Paginated<FoodNutrition>, CoreError>> + Send;

    fn get_food_nutrition(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<FoodNutrition, CoreError>> + Send;

    fn create_food_nutrition(
        &self,
        input: CreateFoodNutritionInput,
    ) -> impl Future<Output = Result<FoodNutrition, CoreError>> + Send;

    fn update_food_nutrition(
        &self,
        id: Uuid,
        input: UpdateFoodNutritionInput,
    ) -> impl Future<Output = Result<FoodNutrition, CoreError>> + Send;

    fn delete_food_nutrition(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
