use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        medication::{entities::Medication, ports::MedicationRepository},
    },
    entity::medications::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresMedicationRepository {
    pub db: DatabaseConnection,
}

impl PostgresMedicationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MedicationRepository for PostgresMedicationRepository {
    async fn create_medication(&self, medication: Medication) -> Result<Medication, CoreError> {
        let active_model = ActiveModel {
            id: Set(medication.id),
            name: Set(medication.name),
            dosage: Set(medication.dosage),
            times_per_day: Set(medication.times_per_day),
            dose_times: Set(json!(medication.dose_times)),
            start_date: Set(medication.start_date.map(|d| d.fixed_offset())),
            expiry_date: Set(medication.expiry_date.map(|d| d.fixed_offset())),
            notes: Set(medication.notes),
            created_at: Set(medication.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create medication: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(created.into())
    }

    async fn get_by_id(&self, medication_id: Uuid) -> Result<Option<Medication>, CoreError> {
        let medication = Entity::find_by_id(medication_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get medication: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(medication.map(Medication::from))
    }

    async fn list_medications(&self) -> Result<Vec<Medication>, CoreError> {
        let medications = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list medications: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(medications.into_iter().map(Medication::from).collect())
    }

    async fn delete_medication(&self, medication_id: Uuid) -> Result<(), CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(medication_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete medication: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
