use nutriscan_core::domain::daily_menu::value_objects::{NutrientChanges, UpdateDailyMenuInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct MatchDailyMenuValidator {
    pub detected_labels: Vec<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "estimated_calories must be >= 0"))]
    pub estimated_calories: f64,
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateDailyMenuValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "menu_items must not be empty"))]
    pub menu_items: Option<Vec<String>>,

    #[serde(default)]
    pub porsi_besar: Option<NutrientChanges>,

    #[serde(default)]
    pub porsi_kecil: Option<NutrientChanges>,

    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<UpdateDailyMenuValidator> for UpdateDailyMenuInput {
    fn from(payload: UpdateDailyMenuValidator) -> Self {
        Self {
            menu_items: payload.menu_items,
            porsi_besar: payload.porsi_besar,
            porsi_kecil: payload.porsi_kecil,
            image_url: payload.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_rejects_negative_calories() {
        let payload = MatchDailyMenuValidator {
            detected_labels: vec!["Nasi".to_string()],
            estimated_calories: -5.0,
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_update_keeps_partial_portion() {
        let payload: UpdateDailyMenuValidator = serde_json::from_value(serde_json::json!({
            "porsi_kecil": { "calories": 480.0 }
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        let input = UpdateDailyMenuInput::from(payload);
        assert_eq!(input.porsi_besar, None);
        assert_eq!(input.porsi_kecil.and_then(|p| p.calories), Some(480.0));
    }

    #[test]
    fn test_update_rejects_empty_item_list() {
        let payload = UpdateDailyMenuValidator {
            menu_items: Some(vec![]),
            ..Default::default()
        };

        assert!(payload.validate().is_err());
    }
}
