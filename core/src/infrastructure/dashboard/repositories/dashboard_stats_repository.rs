use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryOrder, QuerySelect, Statement,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        dashboard::{
            ports::DashboardStatsRepository,
            value_objects::{DailyNutritionStats, NutritionAverages, RecentDetection},
        },
    },
    entity::{detections, food_nutrition},
};

#[derive(Debug, Clone)]
pub struct PostgresDashboardStatsRepository {
    pub db: DatabaseConnection,
}

impl PostgresDashboardStatsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct AveragesRow {
    avg_calories: Option<f64>,
    avg_protein: Option<f64>,
    avg_carbohydrates: Option<f64>,
    avg_fat: Option<f64>,
}

#[derive(Debug, FromQueryResult)]
struct DailyRow {
    date: String,
    total_calories: f64,
    total_protein: f64,
    total_carbohydrates: f64,
    total_fat: f64,
    detection_count: i64,
}

impl DashboardStatsRepository for PostgresDashboardStatsRepository {
    async fn count_detections(&self) -> Result<i64, CoreError> {
        let count = detections::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count detections: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count as i64)
    }

    async fn count_food_nutrition(&self) -> Result<i64, CoreError> {
        let count = food_nutrition::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count food nutrition records: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count as i64)
    }

    async fn average_totals_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<NutritionAverages, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              AVG(total_calories) AS avg_calories,
              AVG(total_protein) AS avg_protein,
              AVG(total_carbohydrates) AS avg_carbohydrates,
              AVG(total_fat) AS avg_fat
            FROM detections
            WHERE detected_at >= $1
            "#,
            [since.fixed_offset().into()],
        );

        let row = AveragesRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to compute nutrition averages: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(row
            .map(|row| NutritionAverages {
                calories: row.avg_calories.unwrap_or(0.0),
                protein: row.avg_protein.unwrap_or(0.0),
                carbohydrates: row.avg_carbohydrates.unwrap_or(0.0),
                fat: row.avg_fat.unwrap_or(0.0),
            })
            .unwrap_or_default())
    }

    async fn daily_totals_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<DailyNutritionStats>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              TO_CHAR(DATE(detected_at), 'YYYY-MM-DD') AS date,
              ROUND(SUM(total_calories)::numeric, 2)::float8 AS total_calories,
              ROUND(SUM(total_protein)::numeric, 2)::float8 AS total_protein,
              ROUND(SUM(total_carbohydrates)::numeric, 2)::float8 AS total_carbohydrates,
              ROUND(SUM(total_fat)::numeric, 2)::float8 AS total_fat,
              COUNT(*) AS detection_count
            FROM detections
            WHERE detected_at >= $1
            GROUP BY DATE(detected_at)
            ORDER BY DATE(detected_at) ASC
            "#,
            [since.fixed_offset().into()],
        );

        let rows = DailyRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to compute daily nutrition totals: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .map(|row| DailyNutritionStats {
                date: row.date,
                total_calories: row.total_calories,
                total_protein: row.total_protein,
                total_carbohydrates: row.total_carbohydrates,
                total_fat: row.total_fat,
                detection_count: row.detection_count,
            })
            .collect())
    }

    async fn recent_detections(&self, limit: u64) -> Result<Vec<RecentDetection>, CoreError> {
        let models = detections::Entity::find()
            .order_by_desc(detections::Column::DetectedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load recent detections: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models
            .into_iter()
            .map(|model| RecentDetection {
                id: model.id,
                menu_count: model.menu_count,
                total_calories: model.total_calories,
                detected_at: model.detected_at.to_utc(),
            })
            .collect())
    }
}
