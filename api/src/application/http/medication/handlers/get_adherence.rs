use axum::extract::State;
use medtrack_core::domain::medication::ports::MedicationService;

use crate::application::http::{
    medication::validators::AdherenceResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/adherence",
    tag = "medication",
    summary = "Today's adherence",
    description = "Doses taken versus required today across all medications.",
    responses(
        (status = 200, body = AdherenceResponse),
        (status = 500, description = "Medications could not be loaded")
    )
)]
pub async fn get_adherence(
    State(state): State<AppState>,
) -> Result<Response<AdherenceResponse>, ApiError> {
    let adherence = state
        .service
        .today_adherence()
        .await
        .map_err(ApiError::failed)?;

    Ok(Response::OK(adherence.into()))
}
