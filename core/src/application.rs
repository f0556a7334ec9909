use crate::{
    domain::common::{MedtrackConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        clock::SystemClock,
        db::postgres::{Postgres, PostgresConfig},
        dose_log::repositories::dose_log_repository::PostgresDoseLogRepository,
        drug_log::repositories::drug_log_repository::PostgresDrugLogRepository,
        health::repository::PostgresHealthCheckRepository,
        medication::repositories::medication_repository::PostgresMedicationRepository,
        openfda::openfda_client::OpenFdaClient,
    },
};

pub type MedtrackService = Service<
    PostgresDrugLogRepository,
    PostgresMedicationRepository,
    PostgresDoseLogRepository,
    OpenFdaClient,
    PostgresHealthCheckRepository,
    SystemClock,
>;

pub async fn create_service(config: MedtrackConfig) -> Result<MedtrackService, CoreError> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
        max_connections: config.database.max_connections,
    })
    .await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresDrugLogRepository::new(db.clone()),
        PostgresMedicationRepository::new(db.clone()),
        PostgresDoseLogRepository::new(db.clone()),
        OpenFdaClient::new(config.openfda)?,
        PostgresHealthCheckRepository::new(db),
        SystemClock,
    ))
}
