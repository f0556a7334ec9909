use chrono::NaiveDate;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    dose_log::{
        entities::{DoseDayState, DoseLog},
        ports::{DoseLogRepository, DoseService},
        value_objects::MarkDoseOutcome,
    },
    drug_log::ports::{AdverseEventClient, DrugLogRepository},
    health::ports::HealthCheckRepository,
    medication::ports::MedicationRepository,
};

impl<DL, M, DO, AE, HC, CL> Service<DL, M, DO, AE, HC, CL>
where
    DL: DrugLogRepository,
    M: MedicationRepository,
    DO: DoseLogRepository,
    AE: AdverseEventClient,
    HC: HealthCheckRepository,
    CL: Clock,
{
    /// Today's record for a medication, created with a zero count if missing.
    ///
    /// Two first-of-the-day calls may both try to create the record; the
    /// loser gets `AlreadyExists` from the unique key and reads the winner's.
    async fn get_or_create_dose_log(
        &self,
        medication_id: Uuid,
        date: NaiveDate,
    ) -> Result<DoseLog, CoreError> {
        if let Some(dose_log) = self
            .dose_log_repository
            .find_for_day(medication_id, date)
            .await?
        {
            return Ok(dose_log);
        }

        match self
            .dose_log_repository
            .create_dose_log(DoseLog::new(medication_id, date))
            .await
        {
            Ok(created) => Ok(created),
            Err(CoreError::AlreadyExists) => {
                debug!(%medication_id, %date, "dose log created concurrently, reusing it");
                self.dose_log_repository
                    .find_for_day(medication_id, date)
                    .await?
                    .ok_or(CoreError::InternalServerError)
            }
            Err(e) => Err(e),
        }
    }
}

impl<DL, M, DO, AE, HC, CL> DoseService for Service<DL, M, DO, AE, HC, CL>
where
    DL: DrugLogRepository,
    M: MedicationRepository,
    DO: DoseLogRepository,
    AE: AdverseEventClient,
    HC: HealthCheckRepository,
    CL: Clock,
{
    #[instrument(skip(self))]
    async fn mark_dose_taken(&self, medication_id: Uuid) -> Result<MarkDoseOutcome, CoreError> {
        let medication = self
            .medication_repository
            .get_by_id(medication_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let today = self.today();
        let required = medication.times_per_day;

        let dose_log = self.get_or_create_dose_log(medication.id, today).await?;
        if dose_log.state(required).is_complete() {
            return Ok(MarkDoseOutcome::AlreadyComplete);
        }

        let updated = self
            .dose_log_repository
            .increment_taken(medication.id, today, required)
            .await?;

        Ok(match updated {
            Some(dose_log) => {
                debug!(
                    state = ?DoseDayState::of(Some(&dose_log), required),
                    "dose marked taken"
                );
                MarkDoseOutcome::Recorded {
                    medication_id: medication.id,
                    taken_today: dose_log.taken_count,
                    required_today: required,
                }
            }
            None => MarkDoseOutcome::AlreadyComplete,
        })
    }
}
