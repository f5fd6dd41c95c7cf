pub mod daily_menu_repository;
