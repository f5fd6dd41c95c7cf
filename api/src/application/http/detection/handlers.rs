pub mod delete_detection;
pub mod detect_tray;
pub mod estimate_nutrition;
pub mod get_detection;
pub mod list_detections;
