use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DrugLog {
    pub id: Uuid,
    pub drug_name: String,
    pub reaction: String,
    pub notes: Option<String>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DrugLogConfig {
    pub drug_name: String,
    pub reaction: String,
    pub notes: Option<String>,
}

impl DrugLog {
    pub fn new(config: DrugLogConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            drug_name: config.drug_name,
            reaction: config.reaction,
            notes: config.notes,
            date: now,
        }
    }
}

/// Outcome of comparing a reported reaction against the official terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReactionAssessment {
    pub matched: bool,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoggedReaction {
    pub log: DrugLog,
    pub official_side_effects: Vec<String>,
    pub assessment: ReactionAssessment,
}
