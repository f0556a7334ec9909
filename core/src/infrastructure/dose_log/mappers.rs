use crate::{domain::dose_log::entities::DoseLog, entity::dose_logs};

impl From<&dose_logs::Model> for DoseLog {
    fn from(model: &dose_logs::Model) -> Self {
        Self {
            id: model.id,
            medication_id: model.medication_id,
            date: model.date,
            taken_count: model.taken_count,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<dose_logs::Model> for DoseLog {
    fn from(model: dose_logs::Model) -> Self {
        Self::from(&model)
    }
}
