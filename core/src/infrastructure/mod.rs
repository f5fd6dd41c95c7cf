pub mod daily_menu;
pub mod dashboard;
pub mod db;
pub mod detection;
pub mod detector;
pub mod health;
pub mod nutrition;
