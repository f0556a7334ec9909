use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum number of adverse-event reports pulled per lookup.
pub const ADVERSE_EVENT_LIMIT: u32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDrugLogInput {
    pub drug_name: String,
    pub reaction: String,
    pub notes: Option<String>,
}

/// One reported adverse event: the reaction terms attached to it, as reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdverseEventReport {
    pub reactions: Vec<String>,
}

impl AdverseEventReport {
    pub fn new<I, S>(reactions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reactions: reactions.into_iter().map(Into::into).collect(),
        }
    }
}
