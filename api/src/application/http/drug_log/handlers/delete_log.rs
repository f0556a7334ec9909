use axum::extract::State;
use medtrack_core::domain::drug_log::ports::DrugLogService;

use crate::application::http::{
    drug_log::validators::DeleteLogValidator,
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
    tag = "drug-log",
    summary = "Delete a reaction log",
    request_body = DeleteLogValidator,
    responses(
        (status = 200, body = SuccessResponse),
        (status = 400, description = "Missing or unknown id")
    )
)]
pub async fn delete_log(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DeleteLogValidator>,
) -> Result<Response<SuccessResponse>, ApiError> {
    let id = payload
        .id
        .ok_or_else(|| ApiError::BadRequest("Missing id".to_string()))?;

    state
        .service
        .delete_log(id)
        .await
        .map_err(ApiError::rejected)?;

    Ok(Response::OK(SuccessResponse::ok()))
}
