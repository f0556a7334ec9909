use chrono::NaiveDate;

use crate::domain::{
    common::{ports::Clock, utc_day},
    dose_log::ports::DoseLogRepository,
    drug_log::ports::{AdverseEventClient, DrugLogRepository},
    health::ports::HealthCheckRepository,
    medication::ports::MedicationRepository,
};

/// Application service. Each domain implements its service trait on it.
#[derive(Clone)]
pub struct Service<DL, M, DO, AE, HC, CL>
where
    DL: DrugLogRepository,
    M: MedicationRepository,
    DO: DoseLogRepository,
    AE: AdverseEventClient,
    HC: HealthCheckRepository,
    CL: Clock,
{
    pub(crate) drug_log_repository: DL,
    pub(crate) medication_repository: M,
    pub(crate) dose_log_repository: DO,
    pub(crate) adverse_event_client: AE,
    pub(crate) health_check_repository: HC,
    pub(crate) clock: CL,
}

impl<DL, M, DO, AE, HC, CL> Service<DL, M, DO, AE, HC, CL>
where
    DL: DrugLogRepository,
    M: MedicationRepository,
    DO: DoseLogRepository,
    AE: AdverseEventClient,
    HC: HealthCheckRepository,
    CL: Clock,
{
    pub fn new(
        drug_log_repository: DL,
        medication_repository: M,
        dose_log_repository: DO,
        adverse_event_client: AE,
        health_check_repository: HC,
        clock: CL,
    ) -> Self {
        Self {
            drug_log_repository,
            medication_repository,
            dose_log_repository,
            adverse_event_client,
            health_check_repository,
            clock,
        }
    }

    pub(crate) fn today(&self) -> NaiveDate {
        utc_day(self.clock.now())
    }
}
