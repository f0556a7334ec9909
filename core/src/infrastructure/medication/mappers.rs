use serde_json::Value;

use crate::{domain::medication::entities::Medication, entity::medications};

/// Reads the `dose_times` jsonb column. Anything but an array of strings is
/// treated as no reminders.
pub fn map_dose_times(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|times| {
            times
                .iter()
                .filter_map(|t| t.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

impl From<&medications::Model> for Medication {
    fn from(model: &medications::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            dosage: model.dosage.clone(),
            times_per_day: model.times_per_day,
            dose_times: map_dose_times(&model.dose_times),
            start_date: model.start_date.map(|d| d.to_utc()),
            expiry_date: model.expiry_date.map(|d| d.to_utc()),
            notes: model.notes.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<medications::Model> for Medication {
    fn from(model: medications::Model) -> Self {
        Self::from(&model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_map_dose_times() {
        assert_eq!(map_dose_times(&json!(["08:00", "20:00"])), vec!["08:00", "20:00"]);
        assert_eq!(map_dose_times(&json!(["08:00", 12])), vec!["08:00"]);
        assert!(map_dose_times(&json!(null)).is_empty());
        assert!(map_dose_times(&json!("08:00")).is_empty());
    }

    #[test]
    fn test_model_to_medication() {
        let created_at = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let model = medications::Model {
            id: Uuid::new_v4(),
            name: "Metformin".to_string(),
            dosage: Some("500mg".to_string()),
            times_per_day: 2,
            dose_times: json!(["08:00", "20:00"]),
            start_date: None,
            expiry_date: Some(created_at.fixed_offset()),
            notes: None,
            created_at: created_at.fixed_offset(),
        };

        let medication = Medication::from(&model);
        assert_eq!(medication.id, model.id);
        assert_eq!(medication.dose_times, vec!["08:00", "20:00"]);
        assert_eq!(medication.expiry_date, Some(created_at));
        assert_eq!(medication.created_at, created_at);
    }
}
