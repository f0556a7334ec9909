use super::handlers::{
    create_medication::{__path_create_medication, create_medication},
    delete_medication::{__path_delete_medication, delete_medication},
    get_adherence::{__path_get_adherence, get_adherence},
    get_medications::{__path_get_medications, get_medications},
    mark_dose_taken::{__path_mark_dose_taken, mark_dose_taken},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_medications,
    create_medication,
    delete_medication,
    mark_dose_taken,
    get_adherence
))]
pub struct MedicationApiDoc;

pub fn medication_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/medications", root_path),
            get(get_medications)
                .post(create_medication)
                .delete(delete_medication),
        )
        .route(
            &format!("{}/medications/mark", root_path),
            post(mark_dose_taken),
        )
        .route(
            &format!("{}/medications/adherence", root_path),
            get(get_adherence),
        )
}
