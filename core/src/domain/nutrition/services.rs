use chrono::Utc;
use futures::future::try_join_all;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        services::Service,
        value_objects::{OffsetLimit, Paginated},
    },
    daily_menu::ports::DailyMenuRepository,
    dashboard::ports::DashboardStatsRepository,
    detection::ports::{DetectionRepository, FoodDetector},
    health::ports::HealthCheckRepository,
    nutrition::{
        entities::{DetectedItem, FoodNutrition, NutritionCalculation},
        ports::{FoodNutritionRepository, NutritionService},
        value_objects::{
            CreateFoodNutritionInput, GetFoodNutritionFilter, UpdateFoodNutritionInput,
            estimate_weight_from_bbox, normalize_food_label, validate_nutrient_amounts,
        },
    },
};

/// Resolves a detector label to a catalog record.
///
/// Exact case-insensitive name first, then a substring match on the label
/// with `_` and `-` turned into spaces. Ambiguous substrings resolve to the
/// first record in catalog order.
pub async fn lookup_food_nutrition<FN>(
    repository: &FN,
    label: &str,
) -> Result<Option<FoodNutrition>, CoreError>
where
    FN: FoodNutritionRepository,
{
    if label.trim().is_empty() {
        return Ok(None);
    }

    if let Some(found) = repository.find_by_name_exact(label).await? {
        return Ok(Some(found));
    }

    let normalized = normalize_food_label(label);
    if normalized.trim().is_empty() {
        return Ok(None);
    }

    repository.find_by_name_contains(&normalized).await
}

/// Builds the calculation for one detection given its catalog match, if any.
pub fn calculate_item_nutrition(
    item: &DetectedItem,
    record: Option<&FoodNutrition>,
) -> NutritionCalculation {
    let weight = estimate_weight_from_bbox(&item.bbox);
    let nutrients = record
        .map(|food| food.profile().scaled_to(weight))
        .unwrap_or_default();

    NutritionCalculation {
        food_name: item.label.clone(),
        matched_food_name: record.map(|food| food.food_name.clone()),
        food_nutrition_id: record.map(|food| food.id),
        estimated_weight_gram: weight.round(),
        confidence: item.confidence,
        calories: nutrients.calories,
        protein: nutrients.protein,
        carbohydrates: nutrients.carbohydrates,
        fat: nutrients.fat,
        fiber: nutrients.fiber,
        bbox: item.bbox.corners(),
    }
}

/// Maps every detection to a calculation, in input order.
///
/// Lookups run concurrently. Unmatched labels produce zeroed calculations;
/// a catalog failure aborts the whole mapping.
pub async fn map_detections<FN>(
    repository: &FN,
    items: &[DetectedItem],
) -> Result<Vec<NutritionCalculation>, CoreError>
where
    FN: FoodNutritionRepository,
{
    let records = try_join_all(
        items
            .iter()
            .map(|item| lookup_food_nutrition(repository, &item.label)),
    )
    .await?;

    let calculations = items
        .iter()
        .zip(records.iter())
        .map(|(item, record)| {
            if record.is_none() {
                debug!(label = %item.label, "no catalog entry for detected label");
            }
            calculate_item_nutrition(item, record.as_ref())
        })
        .collect();

    Ok(calculations)
}

fn validate_food_name(name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > 100 {
        return Err(CoreError::Validation(
            "food_name must be between 1 and 100 characters".to_string(),
        ));
    }
    Ok(name.to_string())
}

fn validate_amounts(food: &FoodNutrition) -> Result<(), CoreError> {
    let amounts = [
        food.calories,
        food.protein,
        food.carbohydrates,
        food.fat,
        food.fiber,
        food.sugar,
        food.sodium,
    ];

    if !validate_nutrient_amounts(&amounts) {
        return Err(CoreError::Validation(
            "nutrient amounts must be non-negative numbers".to_string(),
        ));
    }

    if !(food.reference_weight_gram.is_finite() && food.reference_weight_gram > 0.0) {
        return Err(CoreError::Validation(
            "reference_weight_gram must be positive".to_string(),
        ));
    }

    Ok(())
}

impl<FN, DM, D, DT, HC, DS> NutritionService for Service<FN, DM, D, DT, HC, DS>
where
    FN: FoodNutritionRepository,
    DM: DailyMenuRepository,
    D: DetectionRepository,
    DT: FoodDetector,
    HC: HealthCheckRepository,
    DS: DashboardStatsRepository,
{
    #[instrument(skip(self, items), fields(count = items.len()))]
    async fn map_detections(
        &self,
        items: Vec<DetectedItem>,
    ) -> Result<Vec<NutritionCalculation>, CoreError> {
        map_detections(&self.food_nutrition_repository, &items).await
    }

    async fn lookup_food_nutrition(
        &self,
        label: String,
    ) -> Result<Option<FoodNutrition>, CoreError> {
        lookup_food_nutrition(&self.food_nutrition_repository, &label).await
    }

    async fn list_food_nutrition(
        &self,
        filter: GetFoodNutritionFilter,
        pagination: OffsetLimit,
    ) -> Result<Paginated<FoodNutrition>, CoreError> {
        pagination.validate().map_err(CoreError::Validation)?;

        self.food_nutrition_repository
            .list(filter, pagination)
            .await
    }

    async fn get_food_nutrition(&self, id: Uuid) -> Result<FoodNutrition, CoreError> {
        self.food_nutrition_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(food_name = %input.food_name))]
    async fn create_food_nutrition(
        &self,
        input: CreateFoodNutritionInput,
    ) -> Result<FoodNutrition, CoreError> {
        let food_name = validate_food_name(&input.food_name)?;

        if self
            .food_nutrition_repository
            .find_by_name_exact(&food_name)
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyExists);
        }

        let food = FoodNutrition::new(CreateFoodNutritionInput { food_name, ..input });
        validate_amounts(&food)?;

        self.food_nutrition_repository.create(food).await
    }

    #[instrument(skip(self, input))]
    async fn update_food_nutrition(
        &self,
        id: Uuid,
        input: UpdateFoodNutritionInput,
    ) -> Result<FoodNutrition, CoreError> {
        let mut food = self
            .food_nutrition_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(name) = input.food_name {
            let name = validate_food_name(&name)?;

            if let Some(existing) = self
                .food_nutrition_repository
                .find_by_name_exact(&name)
                .await?
                && existing.id != id
            {
                return Err(CoreError::AlreadyExists);
            }

            food.food_name = name;
        }

        food.calories = input.calories.unwrap_or(food.calories);
        food.protein = input.protein.unwrap_or(food.protein);
        food.carbohydrates = input.carbohydrates.unwrap_or(food.carbohydrates);
        food.fat = input.fat.unwrap_or(food.fat);
        food.fiber = input.fiber.unwrap_or(food.fiber);
        food.sugar = input.sugar.unwrap_or(food.sugar);
        food.sodium = input.sodium.unwrap_or(food.sodium);
        food.reference_weight_gram = input
            .reference_weight_gram
            .unwrap_or(food.reference_weight_gram);
        food.updated_at = Utc::now();

        validate_amounts(&food)?;

        self.food_nutrition_repository.update(food).await
    }

    #[instrument(skip(self))]
    async fn delete_food_nutrition(&self, id: Uuid) -> Result<(), CoreError> {
        self.food_nutrition_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.food_nutrition_repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        nutrition::entities::BoundingBox,
        test_support::{InMemoryFoodNutritionRepository, food, service_with_catalog},
    };

    fn detection(label: &str, bbox: BoundingBox) -> DetectedItem {
        DetectedItem {
            label: label.to_string(),
            class_id: None,
            confidence: 0.87,
            bbox,
        }
    }

    fn nasi_catalog() -> InMemoryFoodNutritionRepository {
        InMemoryFoodNutritionRepository::with_foods(vec![food("Nasi", 130.0, 2.7, 28.0, 0.3, 0.4)])
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let catalog = nasi_catalog();

        let upper = lookup_food_nutrition(&catalog, "Nasi").await.unwrap();
        let lower = lookup_food_nutrition(&catalog, "nasi").await.unwrap();

        assert!(upper.is_some());
        assert_eq!(upper, lower);
    }

    #[tokio::test]
    async fn test_lookup_normalizes_underscored_labels() {
        let catalog = InMemoryFoodNutritionRepository::with_foods(vec![
            food("Nasi", 130.0, 2.7, 28.0, 0.3, 0.4),
            food("Ayam Goreng", 260.0, 27.0, 8.0, 14.0, 0.0),
        ]);

        let found = lookup_food_nutrition(&catalog, "Ayam_Goreng")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.food_name, "Ayam Goreng");
    }

    #[tokio::test]
    async fn test_lookup_substring_takes_first_catalog_entry() {
        let catalog = InMemoryFoodNutritionRepository::with_foods(vec![
            food("Tempe Goreng", 200.0, 19.0, 9.0, 11.0, 1.4),
            food("Tempe", 190.0, 20.0, 8.0, 10.0, 1.4),
        ]);

        let found = lookup_food_nutrition(&catalog, "tempe-gor")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.food_name, "Tempe Goreng");

        let exact = lookup_food_nutrition(&catalog, "TEMPE").await.unwrap().unwrap();
        assert_eq!(exact.food_name, "Tempe");
    }

    #[tokio::test]
    async fn test_lookup_miss_and_blank_label() {
        let catalog = nasi_catalog();

        assert_eq!(lookup_food_nutrition(&catalog, "Sate").await.unwrap(), None);
        assert_eq!(lookup_food_nutrition(&catalog, "  ").await.unwrap(), None);
        assert_eq!(lookup_food_nutrition(&catalog, "_").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_lookup_surfaces_catalog_failure() {
        let catalog = InMemoryFoodNutritionRepository::failing();

        let result = lookup_food_nutrition(&catalog, "Nasi").await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_map_empty_detections() {
        let catalog = nasi_catalog();
        assert!(map_detections(&catalog, &[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_map_nasi_reference_portion() {
        let catalog = nasi_catalog();
        let items = vec![detection("Nasi", BoundingBox::new(0.0, 0.0, 200.0, 200.0))];

        let calculations = map_detections(&catalog, &items).await.unwrap();

        assert_eq!(calculations.len(), 1);
        let nasi = &calculations[0];
        assert_eq!(nasi.matched_food_name.as_deref(), Some("Nasi"));
        assert!(nasi.food_nutrition_id.is_some());
        assert_eq!(nasi.estimated_weight_gram, 150.0);
        assert_eq!(nasi.confidence, 0.87);
        assert!(approx(nasi.calories, 195.0));
        assert!(approx(nasi.protein, 4.05));
        assert!(approx(nasi.carbohydrates, 42.0));
        assert!(approx(nasi.fat, 0.45));
        assert!(approx(nasi.fiber, 0.6));
    }

    #[tokio::test]
    async fn test_map_keeps_unmatched_items_in_order() {
        let catalog = nasi_catalog();
        let items = vec![
            detection("Kerupuk", BoundingBox::new(0.0, 0.0, 50.0, 50.0)),
            detection("nasi", BoundingBox::new(0.0, 0.0, 200.0, 200.0)),
            detection("Sambal", BoundingBox::new(0.0, 0.0, 10.0, 10.0)),
        ];

        let calculations = map_detections(&catalog, &items).await.unwrap();

        let labels: Vec<_> = calculations.iter().map(|c| c.food_name.as_str()).collect();
        assert_eq!(labels, vec!["Kerupuk", "nasi", "Sambal"]);

        let kerupuk = &calculations[0];
        assert!(!kerupuk.is_matched());
        assert_eq!(kerupuk.food_nutrition_id, None);
        assert_eq!(kerupuk.calories, 0.0);
        assert_eq!(kerupuk.fiber, 0.0);
        assert_eq!(kerupuk.estimated_weight_gram, 10.0);

        assert!(calculations[1].is_matched());
        assert!(!calculations[2].is_matched());
    }

    #[tokio::test]
    async fn test_map_is_idempotent() {
        let catalog = nasi_catalog();
        let items = vec![
            detection("Nasi", BoundingBox::new(0.0, 0.0, 250.0, 180.0)),
            detection("Tahu", BoundingBox::new(10.0, 10.0, 90.0, 60.0)),
        ];

        let first = map_detections(&catalog, &items).await.unwrap();
        let second = map_detections(&catalog, &items).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_map_propagates_catalog_failure() {
        let catalog = InMemoryFoodNutritionRepository::failing();
        let items = vec![detection("Nasi", BoundingBox::new(0.0, 0.0, 200.0, 200.0))];

        assert!(map_detections(&catalog, &items).await.is_err());
    }

    #[test]
    fn test_calculation_drops_optional_bbox_dimensions() {
        let item = detection(
            "Nasi",
            BoundingBox {
                width: Some(200.0),
                height: Some(200.0),
                ..BoundingBox::new(5.0, 5.0, 205.0, 205.0)
            },
        );

        let calculation = calculate_item_nutrition(&item, None);

        assert_eq!(calculation.bbox, BoundingBox::new(5.0, 5.0, 205.0, 205.0));
        assert_eq!(calculation.estimated_weight_gram, 150.0);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let service = service_with_catalog(nasi_catalog());

        let result = service
            .create_food_nutrition(CreateFoodNutritionInput::named("NASI"))
            .await;

        assert_eq!(result, Err(CoreError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_create_trims_name_and_applies_defaults() {
        let service = service_with_catalog(nasi_catalog());

        let created = service
            .create_food_nutrition(CreateFoodNutritionInput::named("  Tahu Goreng "))
            .await
            .unwrap();

        assert_eq!(created.food_name, "Tahu Goreng");
        assert_eq!(created.reference_weight_gram, 100.0);
        assert_eq!(created.calories, 0.0);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_amounts() {
        let service = service_with_catalog(nasi_catalog());

        let result = service
            .create_food_nutrition(CreateFoodNutritionInput {
                calories: -5.0,
                ..CreateFoodNutritionInput::named("Tahu")
            })
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let service = service_with_catalog(nasi_catalog());
        let nasi = service
            .lookup_food_nutrition("Nasi".to_string())
            .await
            .unwrap()
            .unwrap();

        let updated = service
            .update_food_nutrition(
                nasi.id,
                UpdateFoodNutritionInput {
                    calories: Some(129.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.calories, 129.0);
        assert_eq!(updated.protein, 2.7);

        service.delete_food_nutrition(nasi.id).await.unwrap();
        assert_eq!(
            service.get_food_nutrition(nasi.id).await,
            Err(CoreError::NotFound)
        );
    }
}
