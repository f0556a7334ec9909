use axum::{Router, extract::State, routing::get};
use medtrack_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LivenessResponse {
    pub status: String,
    pub response_time_ms: u64,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LivenessResponse),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn health_live(State(state): State<AppState>) -> Result<Response<LivenessResponse>, ApiError> {
    let response_time_ms = state
        .service
        .health()
        .await
        .map_err(|_| ApiError::ServiceUnavailable("Database unreachable".to_string()))?;

    Ok(Response::OK(LivenessResponse {
        status: "ok".to_string(),
        response_time_ms,
    }))
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state
        .service
        .readness()
        .await
        .map_err(|_| ApiError::ServiceUnavailable("Database unreachable".to_string()))?;

    Ok(Response::OK(status))
}

#[derive(OpenApi)]
#[openapi(paths(health_live, health_ready))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/health/live", state.args.server.root_path),
            get(health_live),
        )
        .route(
            &format!("{}/health/ready", state.args.server.root_path),
            get(health_ready),
        )
}
