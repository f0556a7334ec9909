use std::collections::HashMap;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    dose_log::ports::DoseLogRepository,
    drug_log::ports::{AdverseEventClient, DrugLogRepository},
    health::ports::HealthCheckRepository,
    medication::{
        entities::{Adherence, Medication, MedicationProgress},
        policies::validate_new_medication,
        ports::{MedicationRepository, MedicationService},
        value_objects::CreateMedicationInput,
    },
};

impl<DL, M, DO, AE, HC, CL> MedicationService for Service<DL, M, DO, AE, HC, CL>
where
    DL: DrugLogRepository,
    M: MedicationRepository,
    DO: DoseLogRepository,
    AE: AdverseEventClient,
    HC: HealthCheckRepository,
    CL: Clock,
{
    #[instrument(skip(self, input))]
    async fn create_medication(&self, input: CreateMedicationInput) -> Result<Medication, CoreError> {
        let config = validate_new_medication(input)?;

        self.medication_repository
            .create_medication(Medication::new(config))
            .await
    }

    async fn list_with_progress(&self) -> Result<Vec<MedicationProgress>, CoreError> {
        let today = self.today();

        let (medications, dose_logs) = futures::try_join!(
            self.medication_repository.list_medications(),
            self.dose_log_repository.list_for_day(today),
        )?;

        let taken_by_medication: HashMap<Uuid, i32> = dose_logs
            .into_iter()
            .map(|dose_log| (dose_log.medication_id, dose_log.taken_count))
            .collect();

        Ok(medications
            .into_iter()
            .map(|medication| {
                let taken = taken_by_medication
                    .get(&medication.id)
                    .copied()
                    .unwrap_or(0);
                MedicationProgress::new(medication, taken, today)
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn delete_medication(&self, medication_id: Uuid) -> Result<(), CoreError> {
        self.medication_repository
            .get_by_id(medication_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let removed = self
            .dose_log_repository
            .delete_for_medication(medication_id)
            .await?;

        self.medication_repository
            .delete_medication(medication_id)
            .await?;

        info!(dose_logs = removed, "medication deleted");
        Ok(())
    }

    async fn today_adherence(&self) -> Result<Adherence, CoreError> {
        let progress = self.list_with_progress().await?;
        Ok(Adherence::from_progress(&progress))
    }
}
