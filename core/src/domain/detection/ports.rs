use bytes::Bytes;
use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        value_objects::{OffsetLimit, Paginated},
    },
    detection::{
        entities::{
            Detection, DetectionItem, DetectionWithItems, DetectorResponse, NutritionEstimate,
            TrayAnalysis,
        },
        value_objects::{AnalyzeTrayInput, GetDetectionsFilter},
    },
    nutrition::entities::DetectedItem,
};

/// Client for the external object-detection service.
#[cfg_attr(test, mockall::automock)]
pub trait FoodDetector: Send + Sync {
    fn detect(
        &self,
        image_data: Bytes,
        filename: String,
    ) -> impl Future<Output = Result<DetectorResponse, CoreError>> + Send;

    fn is_healthy(&self) -> impl Future<Output = bool> + Send;
}

/// Repository trait for stored detections
pub trait DetectionRepository: Send + Sync {
    /// Stores the detection and its items atomically.
    fn create_with_items(
        &self,
        detection: Detection,
        items: Vec<DetectionItem>,
    ) -> impl Future<Output = Result<DetectionWithItems, CoreError>> + Send;

    fn list(
        &self,
        filter: GetDetectionsFilter,
        pagination: OffsetLimit,
    ) -> impl Future<Output = Result<Paginated<Detection>, CoreError>> + Send;

    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<DetectionWithItems>, CoreError>> + Send;

    /// Returns whether a detection was removed.
    fn delete(&self, id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Service trait for the tray analysis pipeline and detection history
pub trait DetectionService: Send + Sync {
    fn analyze_tray(
        &self,
        input: AnalyzeTrayInput,
    ) -> impl Future<Output = Result<TrayAnalysis, CoreError>> + Send;

    fn estimate_nutrition(
        &self,
        detections: Vec<DetectedItem>,
    ) -> impl Future<Output = Result<NutritionEstimate, CoreError>> + Send;

    fn list_detections(
        &self,
        filter: GetDetectionsFilter,
        pagination: OffsetLimit,
    ) -> impl Future<Output = Result<Paginated<Detection>, CoreError>> + Send;

    fn get_detection(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<DetectionWithItems, CoreError>> + Send;

    fn delete_detection(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
