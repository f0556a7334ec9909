use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
    sea_query::Expr,
};
use tracing::{debug, error};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        dose_log::{entities::DoseLog, ports::DoseLogRepository},
    },
    entity::dose_logs::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresDoseLogRepository {
    pub db: DatabaseConnection,
}

impl PostgresDoseLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: DbErr) -> CoreError {
    classify_insert_error(e.sql_err(), e)
}

/// A unique violation on `(medication_id, date)` means another request
/// created today's row first.
fn classify_insert_error(sql_err: Option<SqlErr>, e: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = sql_err {
        debug!("dose log already exists: {}", detail);
        return CoreError::AlreadyExists;
    }

    error!("Failed to create dose log: {}", e);
    CoreError::Storage(e.to_string())
}

impl DoseLogRepository for PostgresDoseLogRepository {
    async fn find_for_day(
        &self,
        medication_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<DoseLog>, CoreError> {
        let dose_log = Entity::find()
            .filter(Column::MedicationId.eq(medication_id))
            .filter(Column::Date.eq(date))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get dose log: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(dose_log.map(DoseLog::from))
    }

    async fn create_dose_log(&self, dose_log: DoseLog) -> Result<DoseLog, CoreError> {
        let active_model = ActiveModel {
            id: Set(dose_log.id),
            medication_id: Set(dose_log.medication_id),
            date: Set(dose_log.date),
            taken_count: Set(dose_log.taken_count),
            created_at: Set(dose_log.created_at.fixed_offset()),
            updated_at: Set(dose_log.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(created.into())
    }

    async fn increment_taken(
        &self,
        medication_id: Uuid,
        date: NaiveDate,
        cap: i32,
    ) -> Result<Option<DoseLog>, CoreError> {
        // Single conditional UPDATE: concurrent callers can never push the
        // count past `cap`.
        let updated = Entity::update_many()
            .col_expr(Column::TakenCount, Expr::col(Column::TakenCount).add(1))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::MedicationId.eq(medication_id))
            .filter(Column::Date.eq(date))
            .filter(Column::TakenCount.lt(cap))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to increment dose log: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(updated.into_iter().next().map(DoseLog::from))
    }

    async fn list_for_day(&self, date: NaiveDate) -> Result<Vec<DoseLog>, CoreError> {
        let dose_logs = Entity::find()
            .filter(Column::Date.eq(date))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list dose logs: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(dose_logs.into_iter().map(DoseLog::from).collect())
    }

    async fn delete_for_medication(&self, medication_id: Uuid) -> Result<u64, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::MedicationId.eq(medication_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete dose logs: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(result.rows_affected)
    }
}
