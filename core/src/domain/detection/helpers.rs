use uuid::Uuid;

use crate::domain::{detection::entities::DetectionItem, nutrition::entities::NutritionCalculation};

/// Builds the stored lines of a detection, keeping calculation order.
pub fn create_items_from_calculations(
    detection_id: Uuid,
    calculations: &[NutritionCalculation],
) -> Vec<DetectionItem> {
    calculations
        .iter()
        .enumerate()
        .map(|(index, calculation)| DetectionItem::new(detection_id, index as i32, calculation))
        .collect()
}

/// Labels used for menu matching: the detected names as reported.
pub fn detected_labels(calculations: &[NutritionCalculation]) -> Vec<String> {
    calculations
        .iter()
        .map(|calculation| calculation.food_name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::entities::BoundingBox;

    fn calculation(name: &str, calories: f64) -> NutritionCalculation {
        NutritionCalculation {
            food_name: name.to_string(),
            matched_food_name: Some(name.to_string()),
            food_nutrition_id: Some(Uuid::new_v4()),
            estimated_weight_gram: 150.0,
            confidence: 0.9,
            calories,
            protein: 1.0,
            carbohydrates: 2.0,
            fat: 3.0,
            fiber: 4.0,
            bbox: BoundingBox::new(1.0, 2.0, 3.0, 4.0),
        }
    }

    #[test]
    fn test_items_follow_calculation_order() {
        let detection_id = Uuid::new_v4();
        let calculations = vec![calculation("Nasi", 195.0), calculation("Tahu", 80.0)];

        let items = create_items_from_calculations(detection_id, &calculations);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_index, 0);
        assert_eq!(items[0].food_name, "Nasi");
        assert_eq!(items[1].item_index, 1);
        assert_eq!(items[1].calories, 80.0);
        assert!(items.iter().all(|item| item.detection_id == detection_id));
        assert_eq!(items[0].bbox_x2, 3.0);
        assert_eq!(items[0].bbox_y2, 4.0);
    }

    #[test]
    fn test_detected_labels() {
        let calculations = vec![calculation("Nasi", 195.0), calculation("Tahu", 80.0)];
        assert_eq!(detected_labels(&calculations), vec!["Nasi", "Tahu"]);
    }
}
