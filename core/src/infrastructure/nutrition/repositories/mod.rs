pub mod food_nutrition_repository;
