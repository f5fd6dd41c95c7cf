//! In-memory port implementations backed by fixture data.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use bytes::Bytes;
use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        services::Service,
        value_objects::{OffsetLimit, Paginated},
    },
    daily_menu::{
        entities::{DailyMenuRow, PortionSize},
        ports::DailyMenuRepository,
    },
    dashboard::{
        ports::DashboardStatsRepository,
        value_objects::{DailyNutritionStats, NutritionAverages, RecentDetection},
    },
    detection::{
        entities::{Detection, DetectionItem, DetectionWithItems, DetectorResponse},
        ports::{DetectionRepository, FoodDetector},
        value_objects::GetDetectionsFilter,
    },
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    nutrition::{
        entities::{FoodNutrition, NutrientProfile},
        ports::FoodNutritionRepository,
        value_objects::{CreateFoodNutritionInput, GetFoodNutritionFilter},
    },
};

pub type TestService = Service<
    InMemoryFoodNutritionRepository,
    InMemoryDailyMenuRepository,
    InMemoryDetectionRepository,
    StubFoodDetector,
    StubHealthCheckRepository,
    InMemoryDashboardStatsRepository,
>;

pub const TEST_MAX_IMAGE_BYTES: usize = 1024 * 1024;

pub fn service_with(
    catalog: InMemoryFoodNutritionRepository,
    menus: InMemoryDailyMenuRepository,
    detector_response: Result<DetectorResponse, CoreError>,
) -> TestService {
    let detections = InMemoryDetectionRepository::default();
    let dashboard = InMemoryDashboardStatsRepository {
        foods: catalog.foods.clone(),
        detections: detections.stored.clone(),
    };

    Service::new(
        catalog,
        menus,
        detections,
        StubFoodDetector {
            response: detector_response,
        },
        StubHealthCheckRepository,
        dashboard,
        TEST_MAX_IMAGE_BYTES,
    )
}

pub fn service_with_catalog(catalog: InMemoryFoodNutritionRepository) -> TestService {
    service_with(
        catalog,
        InMemoryDailyMenuRepository::with_rows(vec![]),
        Ok(DetectorResponse::default()),
    )
}

pub fn food(
    name: &str,
    calories: f64,
    protein: f64,
    carbohydrates: f64,
    fat: f64,
    fiber: f64,
) -> FoodNutrition {
    FoodNutrition::new(CreateFoodNutritionInput {
        calories,
        protein,
        carbohydrates,
        fat,
        fiber,
        ..CreateFoodNutritionInput::named(name)
    })
}

/// Large and small rows for one menu; only calories differ between them.
pub fn menu_rows(
    name: &str,
    items: &[&str],
    large_calories: f64,
    small_calories: f64,
) -> Vec<DailyMenuRow> {
    [
        (PortionSize::Large, large_calories),
        (PortionSize::Small, small_calories),
    ]
    .into_iter()
    .map(|(portion_size, calories)| {
        let now = chrono::Utc::now();
        DailyMenuRow {
            id: Uuid::new_v4(),
            menu_name: name.to_string(),
            portion_size,
            menu_items: items.iter().map(|item| item.to_string()).collect(),
            nutrients: NutrientProfile {
                calories,
                ..Default::default()
            },
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    })
    .collect()
}

fn page<T: Clone>(items: &[T], pagination: OffsetLimit) -> Paginated<T> {
    Paginated {
        items: items
            .iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .cloned()
            .collect(),
        offset: pagination.offset,
        limit: pagination.limit,
        count: items.len() as i64,
    }
}

pub struct InMemoryFoodNutritionRepository {
    foods: Arc<RwLock<Vec<FoodNutrition>>>,
    fail: bool,
}

impl InMemoryFoodNutritionRepository {
    pub fn with_foods(foods: Vec<FoodNutrition>) -> Self {
        Self {
            foods: Arc::new(RwLock::new(foods)),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            foods: Arc::new(RwLock::new(vec![])),
            fail: true,
        }
    }

    fn snapshot(&self) -> Result<Vec<FoodNutrition>, CoreError> {
        if self.fail {
            return Err(CoreError::InternalServerError);
        }
        Ok(self.foods.read().unwrap().clone())
    }
}

impl FoodNutritionRepository for InMemoryFoodNutritionRepository {
    async fn find_by_name_exact(&self, name: &str) -> Result<Option<FoodNutrition>, CoreError> {
        let name = name.to_lowercase();
        Ok(self
            .snapshot()?
            .into_iter()
            .find(|food| food.food_name.to_lowercase() == name))
    }

    async fn find_by_name_contains(
        &self,
        fragment: &str,
    ) -> Result<Option<FoodNutrition>, CoreError> {
        let fragment = fragment.to_lowercase();
        Ok(self
            .snapshot()?
            .into_iter()
            .find(|food| food.food_name.to_lowercase().contains(&fragment)))
    }

    async fn list(
        &self,
        filter: GetFoodNutritionFilter,
        pagination: OffsetLimit,
    ) -> Result<Paginated<FoodNutrition>, CoreError> {
        let mut foods: Vec<_> = self
            .snapshot()?
            .into_iter()
            .filter(|food| match &filter.search {
                Some(search) => food
                    .food_name
                    .to_lowercase()
                    .contains(&search.to_lowercase()),
                None => true,
            })
            .collect();
        foods.sort_by(|a, b| a.food_name.cmp(&b.food_name));

        Ok(page(&foods, pagination))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<FoodNutrition>, CoreError> {
        Ok(self.snapshot()?.into_iter().find(|food| food.id == id))
    }

    async fn create(&self, food: FoodNutrition) -> Result<FoodNutrition, CoreError> {
        self.snapshot()?;
        self.foods.write().unwrap().push(food.clone());
        Ok(food)
    }

    async fn update(&self, food: FoodNutrition) -> Result<FoodNutrition, CoreError> {
        self.snapshot()?;
        let mut foods = self.foods.write().unwrap();
        let existing = foods
            .iter_mut()
            .find(|existing| existing.id == food.id)
            .ok_or(CoreError::NotFound)?;
        *existing = food.clone();
        Ok(food)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        self.snapshot()?;
        self.foods.write().unwrap().retain(|food| food.id != id);
        Ok(())
    }
}

pub struct InMemoryDailyMenuRepository {
    rows: RwLock<Vec<DailyMenuRow>>,
    fail: bool,
}

impl InMemoryDailyMenuRepository {
    pub fn with_rows(rows: Vec<DailyMenuRow>) -> Self {
        Self {
            rows: RwLock::new(rows),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: RwLock::new(vec![]),
            fail: true,
        }
    }

    fn snapshot(&self) -> Result<Vec<DailyMenuRow>, CoreError> {
        if self.fail {
            return Err(CoreError::InternalServerError);
        }
        Ok(self.rows.read().unwrap().clone())
    }
}

impl DailyMenuRepository for InMemoryDailyMenuRepository {
    async fn fetch_all(&self) -> Result<Vec<DailyMenuRow>, CoreError> {
        self.snapshot()
    }

    async fn find_by_name(&self, menu_name: &str) -> Result<Vec<DailyMenuRow>, CoreError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .filter(|row| row.menu_name == menu_name)
            .collect())
    }

    async fn update_rows(&self, rows: Vec<DailyMenuRow>) -> Result<Vec<DailyMenuRow>, CoreError> {
        self.snapshot()?;
        let mut stored = self.rows.write().unwrap();
        for row in &rows {
            if let Some(existing) = stored.iter_mut().find(|existing| existing.id == row.id) {
                *existing = row.clone();
            }
        }
        Ok(rows)
    }
}

#[derive(Default)]
pub struct InMemoryDetectionRepository {
    stored: Arc<RwLock<Vec<DetectionWithItems>>>,
}

impl DetectionRepository for InMemoryDetectionRepository {
    async fn create_with_items(
        &self,
        detection: Detection,
        items: Vec<DetectionItem>,
    ) -> Result<DetectionWithItems, CoreError> {
        let stored = DetectionWithItems { detection, items };
        self.stored.write().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list(
        &self,
        filter: GetDetectionsFilter,
        pagination: OffsetLimit,
    ) -> Result<Paginated<Detection>, CoreError> {
        let detections: Vec<Detection> = self
            .stored
            .read()
            .unwrap()
            .iter()
            .rev()
            .map(|stored| stored.detection.clone())
            .filter(|d| filter.detected_from.is_none_or(|from| d.detected_at >= from))
            .filter(|d| filter.detected_to.is_none_or(|to| d.detected_at <= to))
            .filter(|d| filter.user_id.is_none_or(|user| d.user_id == Some(user)))
            .collect();

        Ok(page(&detections, pagination))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<DetectionWithItems>, CoreError> {
        Ok(self
            .stored
            .read()
            .unwrap()
            .iter()
            .find(|stored| stored.detection.id == id)
            .cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CoreError> {
        let mut stored = self.stored.write().unwrap();
        let before = stored.len();
        stored.retain(|entry| entry.detection.id != id);
        Ok(stored.len() != before)
    }
}

pub struct StubFoodDetector {
    pub response: Result<DetectorResponse, CoreError>,
}

impl FoodDetector for StubFoodDetector {
    async fn detect(
        &self,
        _image_data: Bytes,
        _filename: String,
    ) -> Result<DetectorResponse, CoreError> {
        self.response.clone()
    }

    async fn is_healthy(&self) -> bool {
        self.response.is_ok()
    }
}

pub struct StubHealthCheckRepository;

impl HealthCheckRepository for StubHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(1)
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            status: "UP".to_string(),
            database_status: "UP".to_string(),
            response_time_ms: 1,
        })
    }
}

/// Aggregates over the same data the in-memory repositories hold.
#[derive(Default)]
pub struct InMemoryDashboardStatsRepository {
    foods: Arc<RwLock<Vec<FoodNutrition>>>,
    detections: Arc<RwLock<Vec<DetectionWithItems>>>,
}

impl InMemoryDashboardStatsRepository {
    fn detections_since(&self, since: chrono::DateTime<chrono::Utc>) -> Vec<Detection> {
        self.detections
            .read()
            .unwrap()
            .iter()
            .map(|stored| stored.detection.clone())
            .filter(|detection| detection.detected_at >= since)
            .collect()
    }
}

impl DashboardStatsRepository for InMemoryDashboardStatsRepository {
    async fn count_detections(&self) -> Result<i64, CoreError> {
        Ok(self.detections.read().unwrap().len() as i64)
    }

    async fn count_food_nutrition(&self) -> Result<i64, CoreError> {
        Ok(self.foods.read().unwrap().len() as i64)
    }

    async fn average_totals_since(
        &self,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<NutritionAverages, CoreError> {
        let detections = self.detections_since(since);
        if detections.is_empty() {
            return Ok(NutritionAverages::default());
        }

        let n = detections.len() as f64;
        let mean = |f: fn(&Detection) -> f64| detections.iter().map(f).sum::<f64>() / n;
        Ok(NutritionAverages {
            calories: mean(|d| d.total_calories),
            protein: mean(|d| d.total_protein),
            carbohydrates: mean(|d| d.total_carbohydrates),
            fat: mean(|d| d.total_fat),
        })
    }

    async fn daily_totals_since(
        &self,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<Vec<DailyNutritionStats>, CoreError> {
        let mut days: BTreeMap<String, DailyNutritionStats> = BTreeMap::new();
        for detection in self.detections_since(since) {
            let date = detection.detected_at.date_naive().to_string();
            let day = days.entry(date.clone()).or_insert(DailyNutritionStats {
                date,
                total_calories: 0.0,
                total_protein: 0.0,
                total_carbohydrates: 0.0,
                total_fat: 0.0,
                detection_count: 0,
            });
            day.total_calories += detection.total_calories;
            day.total_protein += detection.total_protein;
            day.total_carbohydrates += detection.total_carbohydrates;
            day.total_fat += detection.total_fat;
            day.detection_count += 1;
        }
        Ok(days.into_values().collect())
    }

    async fn recent_detections(&self, limit: u64) -> Result<Vec<RecentDetection>, CoreError> {
        let mut detections: Vec<Detection> = self
            .detections
            .read()
            .unwrap()
            .iter()
            .map(|stored| stored.detection.clone())
            .collect();
        detections.sort_by(|a, b| b.detected_at.cmp(&a.detected_at));

        Ok(detections
            .into_iter()
            .take(limit as usize)
            .map(|d| RecentDetection {
                id: d.id,
                menu_count: d.menu_count,
                total_calories: d.total_calories,
                detected_at: d.detected_at,
            })
            .collect())
    }
}
