use axum::extract::State;
use medtrack_core::domain::medication::ports::MedicationService;

use crate::application::http::{
    medication::validators::DeleteMedicationValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{Response, SuccessResponse},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "",
    tag = "medication",
    summary = "Delete medication",
    description = "Deletes the medication together with its dose history.",
    request_body = DeleteMedicationValidator,
    responses(
        (status = 200, body = SuccessResponse),
        (status = 400, description = "Missing id"),
        (status = 500, description = "Unknown id or storage failure")
    )
)]
pub async fn delete_medication(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DeleteMedicationValidator>,
) -> Result<Response<SuccessResponse>, ApiError> {
    let id = payload
        .id
        .ok_or_else(|| ApiError::BadRequest("Missing id".to_string()))?;

    state
        .service
        .delete_medication(id)
        .await
        .map_err(ApiError::failed)?;

    Ok(Response::OK(SuccessResponse::ok()))
}
