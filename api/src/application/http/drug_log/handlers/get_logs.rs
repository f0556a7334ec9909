use axum::extract::State;
use medtrack_core::domain::drug_log::ports::DrugLogService;

use crate::application::http::{
    drug_log::validators::DrugLogResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "drug-log",
    summary = "Get reaction logs",
    description = "Lists every logged reaction, newest first.",
    responses(
        (status = 200, body = [DrugLogResponse]),
        (status = 400, description = "Logs could not be loaded")
    )
)]
pub async fn get_logs(
    State(state): State<AppState>,
) -> Result<Response<Vec<DrugLogResponse>>, ApiError> {
    let logs = state
        .service
        .list_logs()
        .await
        .map_err(ApiError::rejected)?;

    Ok(Response::OK(
        logs.into_iter().map(DrugLogResponse::from).collect(),
    ))
}
