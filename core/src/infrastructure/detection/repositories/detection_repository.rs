use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            value_objects::{OffsetLimit, Paginated},
        },
        detection::{
            entities::{Detection, DetectionItem, DetectionWithItems},
            ports::DetectionRepository,
            value_objects::GetDetectionsFilter,
        },
    },
    entity::{
        detection_items::{
            ActiveModel as ItemActiveModel, Column as ItemColumn, Entity as ItemEntity,
        },
        detections::{ActiveModel, Column, Entity},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresDetectionRepository {
    pub db: DatabaseConnection,
}

impl PostgresDetectionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DetectionRepository for PostgresDetectionRepository {
    async fn create_with_items(
        &self,
        detection: Detection,
        items: Vec<DetectionItem>,
    ) -> Result<DetectionWithItems, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin detection transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let created = ActiveModel::from(&detection)
            .insert(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create detection: {}", e);
                CoreError::InternalServerError
            })?;

        if !items.is_empty() {
            ItemEntity::insert_many(items.iter().map(ItemActiveModel::from))
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to create detection items: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit detection: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(DetectionWithItems {
            detection: Detection::from(created),
            items,
        })
    }

    async fn list(
        &self,
        filter: GetDetectionsFilter,
        pagination: OffsetLimit,
    ) -> Result<Paginated<Detection>, CoreError> {
        let mut condition = Condition::all();

        if let Some(detected_from) = filter.detected_from {
            condition = condition.add(Column::DetectedAt.gte(detected_from.fixed_offset()));
        }

        if let Some(detected_to) = filter.detected_to {
            condition = condition.add(Column::DetectedAt.lte(detected_to.fixed_offset()));
        }

        if let Some(user_id) = filter.user_id {
            condition = condition.add(Column::UserId.eq(user_id));
        }

        let query = Entity::find().filter(condition);

        let count = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count detections: {}", e);
            CoreError::InternalServerError
        })?;

        let models = query
            .order_by_desc(Column::DetectedAt)
            .order_by_desc(Column::Id)
            .limit(pagination.limit as u64)
            .offset(pagination.offset as u64)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list detections: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Paginated {
            items: models.iter().map(Detection::from).collect(),
            offset: pagination.offset,
            limit: pagination.limit,
            count: count as i64,
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<DetectionWithItems>, CoreError> {
        let Some(model) = Entity::find_by_id(id).one(&self.db).await.map_err(|e| {
            error!("Failed to get detection: {}", e);
            CoreError::InternalServerError
        })?
        else {
            return Ok(None);
        };

        let items = ItemEntity::find()
            .filter(ItemColumn::DetectionId.eq(id))
            .order_by_asc(ItemColumn::ItemIndex)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load detection items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Some(DetectionWithItems {
            detection: Detection::from(model),
            items: items.into_iter().map(DetectionItem::from).collect(),
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            error!("Failed to delete detection: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(result.rows_affected > 0)
    }
}
