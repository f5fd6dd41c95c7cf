use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        daily_menu::entities::{DailyMenuRow, PortionSize},
        nutrition::entities::NutrientProfile,
    },
    entity::daily_menus,
};

impl TryFrom<daily_menus::Model> for DailyMenuRow {
    type Error = CoreError;

    fn try_from(model: daily_menus::Model) -> Result<Self, Self::Error> {
        let portion_size = PortionSize::try_from(model.portion_size.as_str()).map_err(|e| {
            error!("Invalid daily menu row {}: {}", model.id, e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            id: model.id,
            menu_name: model.menu_name,
            portion_size,
            menu_items: model.menu_items,
            nutrients: NutrientProfile {
                calories: model.calories,
                protein: model.protein,
                carbohydrates: model.carbohydrates,
                fat: model.fat,
                fiber: model.fiber,
            },
            image_url: model.image_url,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

pub fn map_rows(models: Vec<daily_menus::Model>) -> Result<Vec<DailyMenuRow>, CoreError> {
    models.into_iter().map(DailyMenuRow::try_from).collect()
}
