use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    daily_menu::{
        entities::{DailyMenu, DailyMenuRow, MatchedDailyMenu},
        value_objects::UpdateDailyMenuInput,
    },
};

/// Access to the predefined daily menus.
pub trait DailyMenuRepository: Send + Sync {
    /// Every stored row, in catalog order.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<DailyMenuRow>, CoreError>> + Send;

    fn find_by_name(
        &self,
        menu_name: &str,
    ) -> impl Future<Output = Result<Vec<DailyMenuRow>, CoreError>> + Send;

    /// Writes every row back in a single transaction.
    fn update_rows(
        &self,
        rows: Vec<DailyMenuRow>,
    ) -> impl Future<Output = Result<Vec<DailyMenuRow>, CoreError>> + Send;
}

pub trait DailyMenuService: Send + Sync {
    fn list_daily_menus(&self) -> impl Future<Output = Result<Vec<DailyMenu>, CoreError>> + Send;

    fn match_daily_menu(
        &self,
        detected_labels: Vec<String>,
        estimated_calories: f64,
    ) -> impl Future<Output = Result<Option<MatchedDailyMenu>, CoreError>> + Send;

    fn update_daily_menu(
        &self,
        menu_name: String,
        input: UpdateDailyMenuInput,
    ) -> impl Future<Output = Result<DailyMenu, CoreError>> + Send;
}
