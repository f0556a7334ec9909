use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    medication::{
        entities::{Adherence, Medication, MedicationProgress},
        value_objects::CreateMedicationInput,
    },
};

pub trait MedicationService: Send + Sync {
    fn create_medication(
        &self,
        input: CreateMedicationInput,
    ) -> impl Future<Output = Result<Medication, CoreError>> + Send;

    /// Every medication, newest first, joined with today's dose progress.
    fn list_with_progress(
        &self,
    ) -> impl Future<Output = Result<Vec<MedicationProgress>, CoreError>> + Send;

    /// Removes the medication's dose records, then the medication itself.
    fn delete_medication(
        &self,
        medication_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn today_adherence(&self) -> impl Future<Output = Result<Adherence, CoreError>> + Send;
}

/// Repository trait for medications
pub trait MedicationRepository: Send + Sync {
    fn create_medication(
        &self,
        medication: Medication,
    ) -> impl Future<Output = Result<Medication, CoreError>> + Send;

    fn get_by_id(
        &self,
        medication_id: Uuid,
    ) -> impl Future<Output = Result<Option<Medication>, CoreError>> + Send;

    /// All medications ordered by creation time, newest first.
    fn list_medications(&self) -> impl Future<Output = Result<Vec<Medication>, CoreError>> + Send;

    /// Fails with `CoreError::NotFound` when nothing was deleted.
    fn delete_medication(
        &self,
        medication_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
