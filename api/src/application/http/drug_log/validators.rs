use chrono::{DateTime, Utc};
use medtrack_core::domain::drug_log::entities::DrugLog;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDrugLogValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "drugName is required"))]
    pub drug_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "reaction is required"))]
    pub reaction: String,

    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeleteLogValidator {
    #[serde(default)]
    #[validate(required(message = "Missing id"))]
    pub id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrugLogResponse {
    pub id: Uuid,
    pub drug_name: String,
    pub reaction: String,
    pub notes: Option<String>,
    pub date: DateTime<Utc>,
}

impl From<DrugLog> for DrugLogResponse {
    fn from(log: DrugLog) -> Self {
        Self {
            id: log.id,
            drug_name: log.drug_name,
            reaction: log.reaction,
            notes: log.notes,
            date: log.date,
        }
    }
}
