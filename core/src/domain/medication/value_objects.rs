use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MIN_TIMES_PER_DAY: i32 = 1;
pub const MAX_TIMES_PER_DAY: i32 = 24;
pub const DEFAULT_TIMES_PER_DAY: i32 = 1;

/// Medications expiring within this many days are flagged.
pub const EXPIRY_WARNING_DAYS: i64 = 14;

/// Planned dose times, either as a list or as a comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum DoseTimesInput {
    List(Vec<String>),
    Text(String),
}

impl Default for DoseTimesInput {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl DoseTimesInput {
    /// Trimmed, non-empty entries in their original order.
    pub fn normalize(self) -> Vec<String> {
        let entries: Vec<String> = match self {
            Self::List(items) => items,
            Self::Text(text) => text.split(',').map(str::to_string).collect(),
        };

        entries
            .into_iter()
            .map(|entry| entry.trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateMedicationInput {
    pub name: String,
    pub dosage: Option<String>,
    pub times_per_day: Option<i32>,
    pub dose_times: DoseTimesInput,
    pub start_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}
