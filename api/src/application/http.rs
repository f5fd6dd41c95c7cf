pub mod daily_menu;
pub mod dashboard;
pub mod detection;
pub mod health;
pub mod nutrition;
pub mod server;
