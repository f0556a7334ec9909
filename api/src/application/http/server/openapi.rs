use crate::application::http::{
    drug_log::router::DrugLogApiDoc, health::HealthApiDoc, medication::router::MedicationApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Medtrack API"
    ),
    nest(
        (path = "/logs", api = DrugLogApiDoc),
        (path = "/medications", api = MedicationApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
