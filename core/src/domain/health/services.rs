use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    dose_log::ports::DoseLogRepository,
    drug_log::ports::{AdverseEventClient, DrugLogRepository},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    medication::ports::MedicationRepository,
};

impl<DL, M, DO, AE, HC, CL> HealthCheckService for Service<DL, M, DO, AE, HC, CL>
where
    DL: DrugLogRepository,
    M: MedicationRepository,
    DO: DoseLogRepository,
    AE: AdverseEventClient,
    HC: HealthCheckRepository,
    CL: Clock,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
