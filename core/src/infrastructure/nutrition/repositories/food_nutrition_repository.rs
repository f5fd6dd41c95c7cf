use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr,
    prelude::Expr,
    sea_query::{Func, IntoCondition, extension::postgres::PgExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            value_objects::{OffsetLimit, Paginated},
        },
        nutrition::{
            entities::FoodNutrition, ports::FoodNutritionRepository,
            value_objects::GetFoodNutritionFilter,
        },
    },
    entity::food_nutrition::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFoodNutritionRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodNutritionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Escapes `%`, `_` and `\` so the fragment is matched literally.
fn like_pattern(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl FoodNutritionRepository for PostgresFoodNutritionRepository {
    async fn find_by_name_exact(&self, name: &str) -> Result<Option<FoodNutrition>, CoreError> {
        let food = Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(Column::FoodName)))
                    .eq(name.to_lowercase())
                    .into_condition(),
            )
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find food nutrition by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(FoodNutrition::from);

        Ok(food)
    }

    async fn find_by_name_contains(
        &self,
        fragment: &str,
    ) -> Result<Option<FoodNutrition>, CoreError> {
        let food = Entity::find()
            .filter(
                Expr::col(Column::FoodName)
                    .ilike(like_pattern(fragment))
                    .into_condition(),
            )
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search food nutrition by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(FoodNutrition::from);

        Ok(food)
    }

    async fn list(
        &self,
        filter: GetFoodNutritionFilter,
        pagination: OffsetLimit,
    ) -> Result<Paginated<FoodNutrition>, CoreError> {
        let mut query = Entity::find();

        if let Some(ref search) = filter.search {
            query = query.filter(
                Expr::col(Column::FoodName)
                    .ilike(like_pattern(search))
                    .into_condition(),
            );
        }

        let count = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count food nutrition: {}", e);
            CoreError::InternalServerError
        })?;

        let models = query
            .order_by_asc(Column::FoodName)
            .limit(pagination.limit as u64)
            .offset(pagination.offset as u64)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list food nutrition: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Paginated {
            items: models.iter().map(FoodNutrition::from).collect(),
            offset: pagination.offset,
            limit: pagination.limit,
            count: count as i64,
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<FoodNutrition>, CoreError> {
        let food = Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food nutrition by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(FoodNutrition::from);

        Ok(food)
    }

    async fn create(&self, food: FoodNutrition) -> Result<FoodNutrition, CoreError> {
        let created = ActiveModel::from(&food)
            .insert(&self.db)
            .await
            .map_err(|e| {
                if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
                    return CoreError::AlreadyExists;
                }
                error!("Failed to create food nutrition: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FoodNutrition::from(created))
    }

    async fn update(&self, food: FoodNutrition) -> Result<FoodNutrition, CoreError> {
        let mut active_model = ActiveModel::from(&food);
        active_model.created_at = NotSet;

        let updated = active_model.update(&self.db).await.map_err(|e| {
            if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
                return CoreError::AlreadyExists;
            }
            match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update food nutrition: {}", e);
                    CoreError::InternalServerError
                }
            }
        })?;

        Ok(FoodNutrition::from(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            error!("Failed to delete food nutrition: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ayam goreng"), "%ayam goreng%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
