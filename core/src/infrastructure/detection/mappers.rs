use sea_orm::ActiveValue::Set;
use tracing::warn;

use crate::{
    domain::{
        daily_menu::entities::PortionSize,
        detection::entities::{Detection, DetectionItem},
    },
    entity::{detection_items, detections},
};

impl From<&detections::Model> for Detection {
    fn from(model: &detections::Model) -> Self {
        let matched_portion = model.matched_portion.as_deref().and_then(|value| {
            PortionSize::try_from(value)
                .inspect_err(|e| warn!("Ignoring portion on detection {}: {}", model.id, e))
                .ok()
        });

        Self {
            id: model.id,
            user_id: model.user_id,
            image_url: model.image_url.clone(),
            foodtray_count: model.foodtray_count,
            menu_count: model.menu_count,
            total_calories: model.total_calories,
            total_protein: model.total_protein,
            total_carbohydrates: model.total_carbohydrates,
            total_fat: model.total_fat,
            total_fiber: model.total_fiber,
            matched_menu_name: model.matched_menu_name.clone(),
            matched_portion,
            notes: model.notes.clone(),
            detected_at: model.detected_at.to_utc(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<detections::Model> for Detection {
    fn from(model: detections::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&Detection> for detections::ActiveModel {
    fn from(detection: &Detection) -> Self {
        Self {
            id: Set(detection.id),
            user_id: Set(detection.user_id),
            image_url: Set(detection.image_url.clone()),
            foodtray_count: Set(detection.foodtray_count),
            menu_count: Set(detection.menu_count),
            total_calories: Set(detection.total_calories),
            total_protein: Set(detection.total_protein),
            total_carbohydrates: Set(detection.total_carbohydrates),
            total_fat: Set(detection.total_fat),
            total_fiber: Set(detection.total_fiber),
            matched_menu_name: Set(detection.matched_menu_name.clone()),
            matched_portion: Set(detection
                .matched_portion
                .map(|portion| portion.as_str().to_string())),
            notes: Set(detection.notes.clone()),
            detected_at: Set(detection.detected_at.fixed_offset()),
            created_at: Set(detection.created_at.fixed_offset()),
        }
    }
}

impl From<&detection_items::Model> for DetectionItem {
    fn from(model: &detection_items::Model) -> Self {
        Self {
            id: model.id,
            detection_id: model.detection_id,
            item_index: model.item_index,
            food_nutrition_id: model.food_nutrition_id,
            food_name: model.food_name.clone(),
            matched_food_name: model.matched_food_name.clone(),
            confidence: model.confidence,
            estimated_weight_gram: model.estimated_weight_gram,
            calories: model.calories,
            protein: model.protein,
            carbohydrates: model.carbohydrates,
            fat: model.fat,
            fiber: model.fiber,
            bbox_x1: model.bbox_x1,
            bbox_y1: model.bbox_y1,
            bbox_x2: model.bbox_x2,
            bbox_y2: model.bbox_y2,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<detection_items::Model> for DetectionItem {
    fn from(model: detection_items::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&DetectionItem> for detection_items::ActiveModel {
    fn from(item: &DetectionItem) -> Self {
        Self {
            id: Set(item.id),
            detection_id: Set(item.detection_id),
            item_index: Set(item.item_index),
            food_nutrition_id: Set(item.food_nutrition_id),
            food_name: Set(item.food_name.clone()),
            matched_food_name: Set(item.matched_food_name.clone()),
            confidence: Set(item.confidence),
            estimated_weight_gram: Set(item.estimated_weight_gram),
            calories: Set(item.calories),
            protein: Set(item.protein),
            carbohydrates: Set(item.carbohydrates),
            fat: Set(item.fat),
            fiber: Set(item.fiber),
            bbox_x1: Set(item.bbox_x1),
            bbox_y1: Set(item.bbox_y1),
            bbox_x2: Set(item.bbox_x2),
            bbox_y2: Set(item.bbox_y2),
            created_at: Set(item.created_at.fixed_offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_portion_is_dropped() {
        let now = chrono::Utc::now().fixed_offset();
        let model = detections::Model {
            id: uuid::Uuid::new_v4(),
            user_id: None,
            image_url: None,
            foodtray_count: 1,
            menu_count: 3,
            total_calories: 410.5,
            total_protein: 20.0,
            total_carbohydrates: 60.0,
            total_fat: 9.0,
            total_fiber: 3.0,
            matched_menu_name: Some("Menu A".to_string()),
            matched_portion: Some("porsi_sedang".to_string()),
            notes: None,
            detected_at: now,
            created_at: now,
        };

        let detection = Detection::from(&model);

        assert_eq!(detection.matched_menu_name.as_deref(), Some("Menu A"));
        assert_eq!(detection.matched_portion, None);
        assert_eq!(detection.totals().calories, 410.5);
    }
}
