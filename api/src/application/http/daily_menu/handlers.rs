pub mod list_daily_menus;
pub mod match_daily_menu;
pub mod update_daily_menu;
