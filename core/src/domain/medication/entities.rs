use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    medication::policies::{days_to_expiry, is_expiring_soon},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub dosage: Option<String>,
    pub times_per_day: i32,
    pub dose_times: Vec<String>, // "08:00", "20:00", ...
    pub start_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Already validated medication fields, see [`crate::domain::medication::policies`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationConfig {
    pub name: String,
    pub dosage: Option<String>,
    pub times_per_day: i32,
    pub dose_times: Vec<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl Medication {
    pub fn new(config: MedicationConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            dosage: config.dosage,
            times_per_day: config.times_per_day,
            dose_times: config.dose_times,
            start_date: config.start_date,
            expiry_date: config.expiry_date,
            notes: config.notes,
            created_at: now,
        }
    }
}

/// A medication joined with today's dose progress and expiry proximity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MedicationProgress {
    pub medication: Medication,
    pub taken_today: i32,
    pub required_today: i32,
    pub days_to_expiry: Option<i64>,
    pub expiring_soon: Option<bool>,
    pub expired: Option<bool>,
}

impl MedicationProgress {
    pub fn new(medication: Medication, taken_today: i32, today: NaiveDate) -> Self {
        let days = medication
            .expiry_date
            .map(|expiry| days_to_expiry(expiry, today));

        Self {
            taken_today,
            required_today: medication.times_per_day,
            days_to_expiry: days,
            expiring_soon: days.map(is_expiring_soon),
            expired: days.map(|d| d < 0),
            medication,
        }
    }
}

/// Doses taken versus required today, summed over all medications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Adherence {
    pub taken_today: i64,
    pub required_today: i64,
    pub percent: i64,
}

impl Adherence {
    pub fn from_progress(progress: &[MedicationProgress]) -> Self {
        let taken_today: i64 = progress.iter().map(|p| i64::from(p.taken_today)).sum();
        let required_today: i64 = progress.iter().map(|p| i64::from(p.required_today)).sum();

        let percent = if required_today == 0 {
            0
        } else {
            (taken_today as f64 / required_today as f64 * 100.0).round() as i64
        };

        Self {
            taken_today,
            required_today,
            percent,
        }
    }
}
