use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        drug_log::{entities::DrugLog, ports::DrugLogRepository},
    },
    entity::drug_logs::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresDrugLogRepository {
    pub db: DatabaseConnection,
}

impl PostgresDrugLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DrugLogRepository for PostgresDrugLogRepository {
    async fn create_log(&self, log: DrugLog) -> Result<DrugLog, CoreError> {
        let active_model = ActiveModel {
            id: Set(log.id),
            drug_name: Set(log.drug_name),
            reaction: Set(log.reaction),
            notes: Set(log.notes),
            date: Set(log.date.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create drug log: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(created.into())
    }

    async fn list_logs(&self) -> Result<Vec<DrugLog>, CoreError> {
        let logs = Entity::find()
            .order_by_desc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list drug logs: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(logs.into_iter().map(DrugLog::from).collect())
    }

    async fn delete_log(&self, log_id: Uuid) -> Result<(), CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(log_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete drug log: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
