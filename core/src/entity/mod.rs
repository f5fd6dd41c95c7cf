pub mod daily_menus;
pub mod detection_items;
pub mod detections;
pub mod food_nutrition;
