use super::handlers::{
    create_log::{__path_create_log, create_log},
    delete_log::{__path_delete_log, delete_log},
    get_logs::{__path_get_logs, get_logs},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_logs, create_log, delete_log))]
pub struct DrugLogApiDoc;

pub fn drug_log_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/logs", state.args.server.root_path),
        get(get_logs).post(create_log).delete(delete_log),
    )
}
