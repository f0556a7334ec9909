use axum::extract::State;
use medtrack_core::domain::drug_log::{
    entities::LoggedReaction, ports::DrugLogService, value_objects::CreateDrugLogInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    drug_log::validators::{CreateDrugLogValidator, DrugLogResponse},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDrugLogResponse {
    #[serde(flatten)]
    pub log: DrugLogResponse,
    pub official_side_effects: Vec<String>,
    pub advice: String,
    pub matched: bool,
}

impl From<LoggedReaction> for CreateDrugLogResponse {
    fn from(logged: LoggedReaction) -> Self {
        Self {
            log: DrugLogResponse::from(logged.log),
            official_side_effects: logged.official_side_effects,
            advice: logged.assessment.advice,
            matched: logged.assessment.matched,
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "drug-log",
    summary = "Log a reaction",
    description = "Stores the reaction, then compares it with the reactions reported to openFDA for the drug.",
    request_body = CreateDrugLogValidator,
    responses(
        (status = 201, body = CreateDrugLogResponse),
        (status = 400, description = "Missing fields or the log could not be stored")
    )
)]
pub async fn create_log(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateDrugLogValidator>,
) -> Result<Response<CreateDrugLogResponse>, ApiError> {
    let logged = state
        .service
        .create_log(CreateDrugLogInput {
            drug_name: payload.drug_name,
            reaction: payload.reaction,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::rejected)?;

    Ok(Response::Created(CreateDrugLogResponse::from(logged)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use medtrack_core::domain::drug_log::entities::{DrugLog, ReactionAssessment};
    use uuid::Uuid;

    #[test]
    fn test_response_flattens_log() {
        let logged = LoggedReaction {
            log: DrugLog {
                id: Uuid::nil(),
                drug_name: "Ibuprofen".to_string(),
                reaction: "nausea".to_string(),
                notes: None,
                date: Utc::now(),
            },
            official_side_effects: vec!["nausea".to_string(), "headache".to_string()],
            assessment: ReactionAssessment {
                matched: true,
                advice: "✅ matched".to_string(),
            },
        };

        let value = serde_json::to_value(CreateDrugLogResponse::from(logged)).unwrap();
        assert_eq!(value["drugName"], "Ibuprofen");
        assert_eq!(value["officialSideEffects"][1], "headache");
        assert_eq!(value["advice"], "✅ matched");
        assert_eq!(value["matched"], true);
        assert!(value.get("log").is_none());
    }
}
