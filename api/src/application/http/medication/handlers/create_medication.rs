use axum::extract::State;
use medtrack_core::domain::medication::ports::MedicationService;

use crate::application::http::{
    medication::validators::{CreateMedicationValidator, MedicationResponse},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "medication",
    summary = "Create medication",
    description = "Adds a medication with a daily dose target between 1 and 24.",
    request_body = CreateMedicationValidator,
    responses(
        (status = 201, body = MedicationResponse),
        (status = 400, description = "Blank name, timesPerDay out of range or malformed body"),
        (status = 500, description = "Medication could not be stored")
    )
)]
pub async fn create_medication(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateMedicationValidator>,
) -> Result<Response<MedicationResponse>, ApiError> {
    let medication = state
        .service
        .create_medication(payload.into())
        .await
        .map_err(ApiError::failed)?;

    Ok(Response::Created(MedicationResponse::from(medication)))
}
