use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        services::Service,
        value_objects::{OffsetLimit, Paginated},
    },
    daily_menu::{ports::DailyMenuRepository, services::match_daily_menu},
    dashboard::ports::DashboardStatsRepository,
    detection::{
        entities::{
            Detection, DetectionConfig, DetectionWithItems, NutritionEstimate, TrayAnalysis,
        },
        helpers::{create_items_from_calculations, detected_labels},
        ports::{DetectionRepository, DetectionService, FoodDetector},
        value_objects::{AnalyzeTrayInput, GetDetectionsFilter},
    },
    health::ports::HealthCheckRepository,
    nutrition::{
        entities::DetectedItem, ports::FoodNutritionRepository, services::map_detections,
        value_objects::sum_nutrition,
    },
};

/// Maps detections to nutrition, totals them and matches a daily menu.
pub async fn estimate_nutrition<FN, DM>(
    food_nutrition_repository: &FN,
    daily_menu_repository: &DM,
    detections: &[DetectedItem],
) -> Result<NutritionEstimate, CoreError>
where
    FN: FoodNutritionRepository,
    DM: DailyMenuRepository,
{
    let nutrition_items = map_detections(food_nutrition_repository, detections).await?;
    let nutrition_totals = sum_nutrition(&nutrition_items);

    let matched_menu = match_daily_menu(
        daily_menu_repository,
        &detected_labels(&nutrition_items),
        nutrition_totals.calories,
    )
    .await?;

    Ok(NutritionEstimate {
        nutrition_items,
        nutrition_totals,
        matched_menu,
    })
}

impl<FN, DM, D, DT, HC, DS> DetectionService for Service<FN, DM, D, DT, HC, DS>
where
    FN: FoodNutritionRepository,
    DM: DailyMenuRepository,
    D: DetectionRepository,
    DT: FoodDetector,
    HC: HealthCheckRepository,
    DS: DashboardStatsRepository,
{
    #[instrument(skip(self, input), fields(filename = %input.filename, size = input.image_data.len()))]
    async fn analyze_tray(&self, input: AnalyzeTrayInput) -> Result<TrayAnalysis, CoreError> {
        // 1. Validate image
        if input.image_data.is_empty() {
            return Err(CoreError::Validation("image is empty".to_string()));
        }

        if input.image_data.len() > self.max_image_bytes {
            return Err(CoreError::Validation(format!(
                "image too large, max size is {} bytes",
                self.max_image_bytes
            )));
        }

        // 2. Run detection
        let response = self
            .food_detector
            .detect(input.image_data, input.filename)
            .await?;

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| "detection failed".to_string());
            warn!("Detector reported failure: {}", message);
            return Err(CoreError::ExternalServiceError(message));
        }

        // 3. Estimate nutrition for menu detections
        let estimate = estimate_nutrition(
            &self.food_nutrition_repository,
            &self.daily_menu_repository,
            &response.menu.detections,
        )
        .await?;

        // 4. Persist detection and items
        let detection = Detection::new(DetectionConfig {
            user_id: input.user_id,
            image_url: None,
            foodtray_count: response.foodtray.count,
            menu_count: response.menu.count,
            totals: estimate.nutrition_totals,
            matched_menu: estimate.matched_menu.clone(),
            notes: input.notes,
        });
        let items = create_items_from_calculations(detection.id, &estimate.nutrition_items);

        let stored = self
            .detection_repository
            .create_with_items(detection, items)
            .await?;

        info!(
            detection_id = %stored.detection.id,
            items = stored.items.len(),
            calories = stored.detection.total_calories,
            "tray analysed"
        );

        Ok(TrayAnalysis {
            detection: stored.detection,
            image_info: response.image_info,
            foodtray: response.foodtray,
            summary: response.summary,
            nutrition_items: estimate.nutrition_items,
            nutrition_totals: estimate.nutrition_totals,
            matched_menu: estimate.matched_menu,
        })
    }

    #[instrument(skip(self, detections), fields(count = detections.len()))]
    async fn estimate_nutrition(
        &self,
        detections: Vec<DetectedItem>,
    ) -> Result<NutritionEstimate, CoreError> {
        estimate_nutrition(
            &self.food_nutrition_repository,
            &self.daily_menu_repository,
            &detections,
        )
        .await
    }

    async fn list_detections(
        &self,
        filter: GetDetectionsFilter,
        pagination: OffsetLimit,
    ) -> Result<Paginated<Detection>, CoreError> {
        pagination.validate().map_err(CoreError::Validation)?;

        if let (Some(from), Some(to)) = (filter.detected_from, filter.detected_to)
            && from > to
        {
            return Err(CoreError::Validation(
                "detected_from must not be after detected_to".to_string(),
            ));
        }

        self.detection_repository.list(filter, pagination).await
    }

    async fn get_detection(&self, id: Uuid) -> Result<DetectionWithItems, CoreError> {
        self.detection_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn delete_detection(&self, id: Uuid) -> Result<(), CoreError> {
        if !self.detection_repository.delete(id).await? {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::domain::{
        daily_menu::entities::PortionSize,
        detection::entities::{DetectionGroup, DetectorResponse},
        nutrition::entities::BoundingBox,
        detection::ports::MockFoodDetector,
        test_support::{
            InMemoryDailyMenuRepository, InMemoryDashboardStatsRepository,
            InMemoryDetectionRepository, InMemoryFoodNutritionRepository, StubHealthCheckRepository,
            TEST_MAX_IMAGE_BYTES, TestService, food, menu_rows, service_with,
        },
    };

    fn detected(label: &str, side: f64) -> DetectedItem {
        DetectedItem {
            label: label.to_string(),
            class_id: None,
            confidence: 0.8,
            bbox: BoundingBox::new(0.0, 0.0, side, side),
        }
    }

    fn catalog() -> InMemoryFoodNutritionRepository {
        InMemoryFoodNutritionRepository::with_foods(vec![
            food("Nasi", 130.0, 2.7, 28.0, 0.3, 0.4),
            food("Tahu Goreng", 115.0, 9.7, 2.5, 8.5, 1.2),
        ])
    }

    fn menus() -> InMemoryDailyMenuRepository {
        InMemoryDailyMenuRepository::with_rows(menu_rows(
            "Menu A",
            &["Nasi", "Tahu_Goreng"],
            500.0,
            300.0,
        ))
    }

    fn detector_response(detections: Vec<DetectedItem>) -> DetectorResponse {
        DetectorResponse {
            success: true,
            foodtray: DetectionGroup {
                detected: true,
                count: 1,
                detections: vec![],
            },
            menu: DetectionGroup {
                detected: !detections.is_empty(),
                count: detections.len() as i32,
                detections,
            },
            ..Default::default()
        }
    }

    fn tray_input(size: usize) -> AnalyzeTrayInput {
        AnalyzeTrayInput {
            image_data: Bytes::from(vec![0u8; size]),
            filename: "tray.jpg".to_string(),
            user_id: None,
            notes: Some("lunch".to_string()),
        }
    }

    fn service(response: DetectorResponse) -> TestService {
        service_with(catalog(), menus(), Ok(response))
    }

    #[tokio::test]
    async fn test_estimate_totals_and_menu() {
        let estimate = estimate_nutrition(
            &catalog(),
            &menus(),
            &[detected("Nasi", 200.0), detected("Tahu_Goreng", 100.0)],
        )
        .await
        .unwrap();

        assert_eq!(estimate.nutrition_items.len(), 2);
        // 195.00 for 150 g of rice, 43.13 for 37.5 g of tofu
        assert_eq!(estimate.nutrition_totals.calories, 238.13);

        let menu = estimate.matched_menu.unwrap();
        assert_eq!(menu.menu_name, "Menu A");
        assert_eq!(menu.match_score, 1.0);
        assert_eq!(menu.closest_portion, PortionSize::Small);
    }

    #[tokio::test]
    async fn test_estimate_empty_detections() {
        let estimate = estimate_nutrition(&catalog(), &menus(), &[]).await.unwrap();

        assert!(estimate.nutrition_items.is_empty());
        assert_eq!(estimate.nutrition_totals.calories, 0.0);
        assert_eq!(estimate.matched_menu, None);
    }

    #[tokio::test]
    async fn test_estimate_surfaces_menu_failure() {
        let result = estimate_nutrition(
            &catalog(),
            &InMemoryDailyMenuRepository::failing(),
            &[detected("Nasi", 200.0)],
        )
        .await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_analyze_tray_persists_detection() {
        let service = service(detector_response(vec![
            detected("Nasi", 200.0),
            detected("Kerupuk", 60.0),
        ]));

        let analysis = service.analyze_tray(tray_input(1024)).await.unwrap();

        assert_eq!(analysis.detection.menu_count, 2);
        assert_eq!(analysis.detection.foodtray_count, 1);
        assert_eq!(analysis.detection.total_calories, 195.0);
        assert_eq!(analysis.detection.notes.as_deref(), Some("lunch"));
        assert_eq!(analysis.detection.matched_menu_name.as_deref(), Some("Menu A"));
        assert_eq!(analysis.nutrition_items.len(), 2);
        assert!(!analysis.nutrition_items[1].is_matched());

        let stored = service
            .get_detection(analysis.detection.id)
            .await
            .unwrap();
        assert_eq!(stored.items.len(), 2);
        assert_eq!(stored.items[0].food_name, "Nasi");
        assert_eq!(stored.items[1].food_name, "Kerupuk");
    }

    #[tokio::test]
    async fn test_analyze_tray_rejects_bad_images() {
        let mut detector = MockFoodDetector::new();
        detector.expect_detect().never();

        let service = Service::new(
            catalog(),
            menus(),
            InMemoryDetectionRepository::default(),
            detector,
            StubHealthCheckRepository,
            InMemoryDashboardStatsRepository::default(),
            TEST_MAX_IMAGE_BYTES,
        );

        assert!(matches!(
            service.analyze_tray(tray_input(0)).await,
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            service.analyze_tray(tray_input(2 * 1024 * 1024)).await,
            Err(CoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_analyze_tray_reports_detector_failure() {
        let failed = DetectorResponse {
            success: false,
            error: Some("model not loaded".to_string()),
            ..Default::default()
        };
        let service = service(failed);

        let result = service.analyze_tray(tray_input(16)).await;

        assert_eq!(
            result,
            Err(CoreError::ExternalServiceError("model not loaded".to_string()))
        );
    }

    #[tokio::test]
    async fn test_analyze_tray_propagates_unreachable_detector() {
        let service = service_with(
            catalog(),
            menus(),
            Err(CoreError::DetectorUnavailable("connection refused".to_string())),
        );

        let result = service.analyze_tray(tray_input(16)).await;

        assert!(matches!(result, Err(CoreError::DetectorUnavailable(_))));
        let page = service
            .list_detections(GetDetectionsFilter::default(), OffsetLimit::default())
            .await
            .unwrap();
        assert_eq!(page.count, 0);
    }

    #[tokio::test]
    async fn test_list_and_delete_detections() {
        let service = service(detector_response(vec![detected("Nasi", 200.0)]));
        let first = service.analyze_tray(tray_input(16)).await.unwrap();
        service.analyze_tray(tray_input(16)).await.unwrap();

        let page = service
            .list_detections(GetDetectionsFilter::default(), OffsetLimit::new(0, 1))
            .await
            .unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.items.len(), 1);

        service.delete_detection(first.detection.id).await.unwrap();
        assert_eq!(
            service.delete_detection(first.detection.id).await,
            Err(CoreError::NotFound)
        );
        assert_eq!(
            service.get_detection(first.detection.id).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_list_rejects_inverted_range() {
        let service = service(detector_response(vec![]));
        let now = chrono::Utc::now();

        let result = service
            .list_detections(
                GetDetectionsFilter {
                    detected_from: Some(now),
                    detected_to: Some(now - chrono::Duration::days(1)),
                    user_id: None,
                },
                OffsetLimit::default(),
            )
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }
}
