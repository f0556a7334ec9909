use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{
    common::{entities::app_errors::CoreError, start_of_utc_day},
    medication::{
        entities::MedicationConfig,
        value_objects::{
            CreateMedicationInput, DEFAULT_TIMES_PER_DAY, EXPIRY_WARNING_DAYS, MAX_TIMES_PER_DAY,
            MIN_TIMES_PER_DAY,
        },
    },
};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub fn validate_times_per_day(times_per_day: Option<i32>) -> Result<i32, CoreError> {
    let times_per_day = times_per_day.unwrap_or(DEFAULT_TIMES_PER_DAY);
    if !(MIN_TIMES_PER_DAY..=MAX_TIMES_PER_DAY).contains(&times_per_day) {
        return Err(CoreError::Validation(format!(
            "timesPerDay must be between {MIN_TIMES_PER_DAY} and {MAX_TIMES_PER_DAY}"
        )));
    }
    Ok(times_per_day)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Checks and normalizes user input before anything is persisted.
pub fn validate_new_medication(input: CreateMedicationInput) -> Result<MedicationConfig, CoreError> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(CoreError::Validation("Name is required".to_string()));
    }

    let times_per_day = validate_times_per_day(input.times_per_day)?;

    Ok(MedicationConfig {
        name,
        dosage: non_blank(input.dosage),
        times_per_day,
        dose_times: input.dose_times.normalize(),
        start_date: input.start_date,
        expiry_date: input.expiry_date,
        notes: non_blank(input.notes),
    })
}

/// Whole days from the start of `today` (UTC) until `expiry`, rounded up.
pub fn days_to_expiry(expiry: DateTime<Utc>, today: NaiveDate) -> i64 {
    let diff_ms = (expiry - start_of_utc_day(today)).num_milliseconds();
    (diff_ms as f64 / MILLIS_PER_DAY).ceil() as i64
}

pub fn is_expiring_soon(days_to_expiry: i64) -> bool {
    (0..=EXPIRY_WARNING_DAYS).contains(&days_to_expiry)
}
