use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use medtrack_core::domain::medication::{
    entities::{Adherence, Medication, MedicationProgress},
    value_objects::{CreateMedicationInput, DoseTimesInput},
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Parses a calendar date (UTC midnight), RFC3339, or ISO 8601 without an
/// offset (assumed UTC).
pub fn parse_datetime_utc(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Optional date field. `null`, a missing field and `""` all mean "not set".
fn deserialize_optional_datetime_utc<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_datetime_utc(s).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "Invalid date: {}. Expected YYYY-MM-DD, RFC3339 (e.g., '2025-12-02T02:08:23Z') or ISO 8601 without timezone",
                s
            ))
        }),
    }
}

const TIMES_PER_DAY_RANGE: &str = "timesPerDay must be between 1 and 24";

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

/// `timesPerDay` as a number or a numeric string. `null` and `""` fall back
/// to the default.
fn deserialize_optional_times_per_day<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(text)) => match text.trim() {
            "" => return Ok(None),
            s => s
                .parse::<i64>()
                .map_err(|_| <D::Error as serde::de::Error>::custom(TIMES_PER_DAY_RANGE))?,
        },
    };

    // Saturate so huge values still fail the range check.
    Ok(Some(number.clamp(i32::MIN.into(), i32::MAX.into()) as i32))
}

/// `null` and a missing field both mean "no planned times".
fn deserialize_dose_times<'de, D>(deserializer: D) -> Result<DoseTimesInput, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DoseTimesInput>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedicationValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    pub dosage: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_times_per_day")]
    #[validate(range(min = 1, max = 24, message = "timesPerDay must be between 1 and 24"))]
    pub times_per_day: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_optional_datetime_utc")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "deserialize_optional_datetime_utc")]
    pub expiry_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default, deserialize_with = "deserialize_dose_times")]
    #[schema(value_type = Vec<String>)]
    pub dose_times: DoseTimesInput,
}

impl From<CreateMedicationValidator> for CreateMedicationInput {
    fn from(payload: CreateMedicationValidator) -> Self {
        Self {
            name: payload.name,
            dosage: payload.dosage,
            times_per_day: payload.times_per_day,
            dose_times: payload.dose_times,
            start_date: payload.start_date,
            expiry_date: payload.expiry_date,
            notes: payload.notes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeleteMedicationValidator {
    #[serde(default)]
    #[validate(required(message = "Missing id"))]
    pub id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkDoseValidator {
    #[serde(default)]
    #[validate(required(message = "Missing medId"))]
    pub med_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationResponse {
    pub id: Uuid,
    pub name: String,
    pub dosage: Option<String>,
    pub times_per_day: i32,
    pub dose_times: Vec<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Medication> for MedicationResponse {
    fn from(medication: Medication) -> Self {
        Self {
            id: medication.id,
            name: medication.name,
            dosage: medication.dosage,
            times_per_day: medication.times_per_day,
            dose_times: medication.dose_times,
            start_date: medication.start_date,
            expiry_date: medication.expiry_date,
            notes: medication.notes,
            created_at: medication.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationProgressResponse {
    #[serde(flatten)]
    pub medication: MedicationResponse,
    pub taken_today: i32,
    pub required_today: i32,
    pub days_to_expiry: Option<i64>,
    pub expiring_soon: Option<bool>,
    pub expired: Option<bool>,
}

impl From<MedicationProgress> for MedicationProgressResponse {
    fn from(progress: MedicationProgress) -> Self {
        Self {
            medication: MedicationResponse::from(progress.medication),
            taken_today: progress.taken_today,
            required_today: progress.required_today,
            days_to_expiry: progress.days_to_expiry,
            expiring_soon: progress.expiring_soon,
            expired: progress.expired,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdherenceResponse {
    pub taken_today: i64,
    pub required_today: i64,
    pub percent: i64,
}

impl From<Adherence> for AdherenceResponse {
    fn from(adherence: Adherence) -> Self {
        Self {
            taken_today: adherence.taken_today,
            required_today: adherence.required_today,
            percent: adherence.percent,
        }
    }
}
