use axum::extract::State;
use medtrack_core::domain::{
    common::entities::app_errors::CoreError,
    dose_log::{
        ports::DoseService,
        value_objects::{ALREADY_COMPLETE_MESSAGE, MarkDoseOutcome},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    medication::validators::MarkDoseValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoseRecordedResponse {
    pub medication_id: Uuid,
    pub taken_today: i32,
    pub required_today: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum MarkDoseResponse {
    Recorded(DoseRecordedResponse),
    AlreadyComplete(MessageResponse),
}

impl From<MarkDoseOutcome> for MarkDoseResponse {
    fn from(outcome: MarkDoseOutcome) -> Self {
        match outcome {
            MarkDoseOutcome::Recorded {
                medication_id,
                taken_today,
                required_today,
            } => MarkDoseResponse::Recorded(DoseRecordedResponse {
                medication_id,
                taken_today,
                required_today,
            }),
            MarkDoseOutcome::AlreadyComplete => MarkDoseResponse::AlreadyComplete(MessageResponse {
                message: ALREADY_COMPLETE_MESSAGE.to_string(),
            }),
        }
    }
}

#[utoipa::path(
    post,
    path = "/mark",
    tag = "medication",
    summary = "Mark a dose taken",
    description = "Counts one of today's doses. Once the daily target is reached, further calls change nothing.",
    request_body = MarkDoseValidator,
    responses(
        (status = 200, body = MarkDoseResponse),
        (status = 400, description = "Missing medId"),
        (status = 404, description = "Medication not found")
    )
)]
pub async fn mark_dose_taken(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MarkDoseValidator>,
) -> Result<Response<MarkDoseResponse>, ApiError> {
    let medication_id = payload
        .med_id
        .ok_or_else(|| ApiError::BadRequest("Missing medId".to_string()))?;

    let outcome = state
        .service
        .mark_dose_taken(medication_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Medication not found".to_string()),
            other => ApiError::failed(other),
        })?;

    Ok(Response::OK(outcome.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_body() {
        let id = Uuid::new_v4();
        let value = serde_json::to_value(MarkDoseResponse::from(MarkDoseOutcome::Recorded {
            medication_id: id,
            taken_today: 2,
            required_today: 3,
        }))
        .unwrap();

        assert_eq!(value["medicationId"], id.to_string());
        assert_eq!(value["takenToday"], 2);
        assert_eq!(value["requiredToday"], 3);
        assert!(value.get("message").is_none());
    }

    #[test]
    fn test_already_complete_body() {
        let value =
            serde_json::to_value(MarkDoseResponse::from(MarkDoseOutcome::AlreadyComplete)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "message": "All doses already marked for today." })
        );
    }
}
