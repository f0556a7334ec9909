use axum::extract::State;
use medtrack_core::domain::medication::ports::MedicationService;

use crate::application::http::{
    medication::validators::MedicationProgressResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "medication",
    summary = "Get medications",
    description = "Lists medications, newest first, with today's dose progress and expiry flags.",
    responses(
        (status = 200, body = [MedicationProgressResponse]),
        (status = 500, description = "Medications could not be loaded")
    )
)]
pub async fn get_medications(
    State(state): State<AppState>,
) -> Result<Response<Vec<MedicationProgressResponse>>, ApiError> {
    let progress = state
        .service
        .list_with_progress()
        .await
        .map_err(ApiError::failed)?;

    Ok(Response::OK(
        progress
            .into_iter()
            .map(MedicationProgressResponse::from)
            .collect(),
    ))
}
