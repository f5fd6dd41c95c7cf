pub mod create_food_nutrition;
pub mod delete_food_nutrition;
pub mod get_food_nutrition;
pub mod list_food_nutrition;
pub mod update_food_nutrition;
