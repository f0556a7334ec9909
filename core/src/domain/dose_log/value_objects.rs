use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const ALREADY_COMPLETE_MESSAGE: &str = "All doses already marked for today.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MarkDoseOutcome {
    Recorded {
        medication_id: Uuid,
        taken_today: i32,
        required_today: i32,
    },
    AlreadyComplete,
}
