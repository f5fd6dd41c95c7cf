use crate::{domain::nutrition::entities::FoodNutrition, entity::food_nutrition};

impl From<&food_nutrition::Model> for FoodNutrition {
    fn from(model: &food_nutrition::Model) -> Self {
        Self {
            id: model.id,
            food_name: model.food_name.clone(),
            calories: model.calories,
            protein: model.protein,
            carbohydrates: model.carbohydrates,
            fat: model.fat,
            fiber: model.fiber,
            sugar: model.sugar,
            sodium: model.sodium,
            reference_weight_gram: model.reference_weight_gram,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<food_nutrition::Model> for FoodNutrition {
    fn from(model: food_nutrition::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&FoodNutrition> for food_nutrition::ActiveModel {
    fn from(food: &FoodNutrition) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(food.id),
            food_name: Set(food.food_name.clone()),
            calories: Set(food.calories),
            protein: Set(food.protein),
            carbohydrates: Set(food.carbohydrates),
            fat: Set(food.fat),
            fiber: Set(food.fiber),
            sugar: Set(food.sugar),
            sodium: Set(food.sodium),
            reference_weight_gram: Set(food.reference_weight_gram),
            created_at: Set(food.created_at.fixed_offset()),
            updated_at: Set(food.updated_at.fixed_offset()),
        }
    }
}
