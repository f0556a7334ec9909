use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dose_log::{entities::DoseLog, value_objects::MarkDoseOutcome},
};

pub trait DoseService: Send + Sync {
    /// Marks one more of today's doses as taken, never past the daily target.
    fn mark_dose_taken(
        &self,
        medication_id: Uuid,
    ) -> impl Future<Output = Result<MarkDoseOutcome, CoreError>> + Send;
}

/// Repository trait for per-day dose counters.
///
/// Storage must keep `(medication_id, date)` unique.
pub trait DoseLogRepository: Send + Sync {
    fn find_for_day(
        &self,
        medication_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Option<DoseLog>, CoreError>> + Send;

    /// Fails with `CoreError::AlreadyExists` when the day already has a record.
    fn create_dose_log(
        &self,
        dose_log: DoseLog,
    ) -> impl Future<Output = Result<DoseLog, CoreError>> + Send;

    /// Adds one dose if the day's count is below `cap`. Returns `None` when
    /// the count had already reached `cap` and nothing changed.
    fn increment_taken(
        &self,
        medication_id: Uuid,
        date: NaiveDate,
        cap: i32,
    ) -> impl Future<Output = Result<Option<DoseLog>, CoreError>> + Send;

    fn list_for_day(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<DoseLog>, CoreError>> + Send;

    /// Returns the number of removed records.
    fn delete_for_medication(
        &self,
        medication_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
