use crate::{domain::drug_log::entities::DrugLog, entity::drug_logs};

impl From<&drug_logs::Model> for DrugLog {
    fn from(model: &drug_logs::Model) -> Self {
        Self {
            id: model.id,
            drug_name: model.drug_name.clone(),
            reaction: model.reaction.clone(),
            notes: model.notes.clone(),
            date: model.date.to_utc(),
        }
    }
}

impl From<drug_logs::Model> for DrugLog {
    fn from(model: drug_logs::Model) -> Self {
        Self::from(&model)
    }
}
