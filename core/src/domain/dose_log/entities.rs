use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Doses of one medication marked taken on one UTC day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DoseLog {
    pub id: Uuid,
    pub medication_id: Uuid,
    pub date: NaiveDate,
    pub taken_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DoseLog {
    pub fn new(medication_id: Uuid, date: NaiveDate) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            medication_id,
            date,
            taken_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn state(&self, required: i32) -> DoseDayState {
        DoseDayState::from_count(self.taken_count, required)
    }
}

/// Progress of a (medication, day) pair. Only ever moves forward within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DoseDayState {
    NoRecord,
    PartiallyTaken { taken: i32, required: i32 },
    Complete,
}

impl DoseDayState {
    /// A zero count is treated like a missing record.
    pub fn from_count(taken: i32, required: i32) -> Self {
        if taken >= required {
            Self::Complete
        } else if taken <= 0 {
            Self::NoRecord
        } else {
            Self::PartiallyTaken { taken, required }
        }
    }

    pub fn of(log: Option<&DoseLog>, required: i32) -> Self {
        log.map_or(Self::NoRecord, |log| log.state(required))
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}
