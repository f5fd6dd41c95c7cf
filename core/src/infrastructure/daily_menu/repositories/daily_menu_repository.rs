use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        daily_menu::{entities::DailyMenuRow, ports::DailyMenuRepository},
    },
    entity::daily_menus::{ActiveModel, Column, Entity},
    infrastructure::daily_menu::mappers::map_rows,
};

#[derive(Debug, Clone)]
pub struct PostgresDailyMenuRepository {
    pub db: DatabaseConnection,
}

impl PostgresDailyMenuRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DailyMenuRepository for PostgresDailyMenuRepository {
    async fn fetch_all(&self) -> Result<Vec<DailyMenuRow>, CoreError> {
        let models = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch daily menus: {}", e);
                CoreError::InternalServerError
            })?;

        map_rows(models)
    }

    async fn find_by_name(&self, menu_name: &str) -> Result<Vec<DailyMenuRow>, CoreError> {
        let models = Entity::find()
            .filter(Column::MenuName.eq(menu_name))
            .order_by_asc(Column::PortionSize)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch daily menu {}: {}", menu_name, e);
                CoreError::InternalServerError
            })?;

        map_rows(models)
    }

    async fn update_rows(&self, rows: Vec<DailyMenuRow>) -> Result<Vec<DailyMenuRow>, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin daily menu transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let mut updated = Vec::with_capacity(rows.len());
        for row in rows {
            let model = ActiveModel {
                id: Set(row.id),
                menu_items: Set(row.menu_items),
                calories: Set(row.nutrients.calories),
                protein: Set(row.nutrients.protein),
                carbohydrates: Set(row.nutrients.carbohydrates),
                fat: Set(row.nutrients.fat),
                fiber: Set(row.nutrients.fiber),
                image_url: Set(row.image_url),
                updated_at: Set(row.updated_at.fixed_offset()),
                ..Default::default()
            }
            .update(&txn)
            .await
            .map_err(|e| {
                error!("Failed to update daily menu row {}: {}", row.id, e);
                CoreError::InternalServerError
            })?;
            updated.push(model);
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit daily menu update: {}", e);
            CoreError::InternalServerError
        })?;

        map_rows(updated)
    }
}
