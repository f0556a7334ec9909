use tracing::{instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    dose_log::ports::DoseLogRepository,
    drug_log::{
        entities::{DrugLog, DrugLogConfig, LoggedReaction},
        matcher::{assess_reaction, collect_reaction_terms},
        ports::{AdverseEventClient, DrugLogRepository, DrugLogService},
        value_objects::{ADVERSE_EVENT_LIMIT, CreateDrugLogInput},
    },
    health::ports::HealthCheckRepository,
    medication::ports::MedicationRepository,
};

fn required(value: String, field: &str) -> Result<String, CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(value)
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
    /// Reported reaction terms for a drug. Lookup failures degrade to no terms.
    async fn official_reaction_terms(&self, drug_name: &str) -> Vec<String> {
        match self
            .adverse_event_client
            .search_reports(drug_name, ADVERSE_EVENT_LIMIT)
            .await
        {
            Ok(reports) => collect_reaction_terms(&reports),
            Err(e) => {
                warn!(drug = %drug_name, "adverse-event lookup unavailable: {}", e);
                Vec::new()
            }
        }
    }
}

impl<DL, M, DO, AE, HC, CL> DrugLogService for Service<DL, M, DO, AE, HC, CL>
where
    DL: DrugLogRepository,
    M: MedicationRepository,
    DO: DoseLogRepository,
    AE: AdverseEventClient,
    HC: HealthCheckRepository,
    CL: Clock,
{
    #[instrument(skip(self, input), fields(drug = %input.drug_name))]
    async fn create_log(&self, input: CreateDrugLogInput) -> Result<LoggedReaction, CoreError> {
        let drug_name = required(input.drug_name, "drugName")?;
        let reaction = required(input.reaction, "reaction")?;

        let log = self
            .drug_log_repository
            .create_log(DrugLog::new(DrugLogConfig {
                drug_name,
                reaction,
                notes: input.notes,
            }))
            .await?;

        let official_side_effects = self.official_reaction_terms(&log.drug_name).await;
        let assessment = assess_reaction(&log.drug_name, &log.reaction, &official_side_effects);

        Ok(LoggedReaction {
            log,
            official_side_effects,
            assessment,
        })
    }

    async fn list_logs(&self) -> Result<Vec<DrugLog>, CoreError> {
        self.drug_log_repository.list_logs().await
    }

    #[instrument(skip(self))]
    async fn delete_log(&self, log_id: Uuid) -> Result<(), CoreError> {
        self.drug_log_repository.delete_log(log_id).await
    }
}
