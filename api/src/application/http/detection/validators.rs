use chrono::{DateTime, Utc};
use nutriscan_core::domain::{
    common::value_objects::OffsetLimit, detection::value_objects::GetDetectionsFilter,
    nutrition::entities::DetectedItem,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct EstimateNutritionValidator {
    #[validate(length(max = 200, message = "at most 200 detections per request"))]
    pub detections: Vec<DetectedItem>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListDetectionsQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub detected_from: Option<DateTime<Utc>>,
    pub detected_to: Option<DateTime<Utc>>,
}

impl ListDetectionsQuery {
    pub fn filter(&self) -> GetDetectionsFilter {
        GetDetectionsFilter {
            detected_from: self.detected_from,
            detected_to: self.detected_to,
            user_id: None,
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
