use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, error};

use crate::domain::{
    common::{OpenFdaConfig, entities::app_errors::CoreError},
    drug_log::{ports::AdverseEventClient, value_objects::AdverseEventReport},
};

pub const DEFAULT_OPENFDA_BASE_URL: &str = "https://api.fda.gov";

/// Adverse-event reports from the openFDA `drug/event` endpoint.
#[derive(Debug, Clone)]
pub struct OpenFdaClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct EventResponse {
    #[serde(default)]
    results: Vec<EventResult>,
}

#[derive(Debug, Deserialize)]
struct EventResult {
    patient: Option<Patient>,
}

#[derive(Debug, Deserialize)]
struct Patient {
    #[serde(default)]
    reaction: Vec<Reaction>,
}

#[derive(Debug, Deserialize)]
struct Reaction {
    reactionmeddrapt: Option<String>,
}

impl From<EventResult> for AdverseEventReport {
    fn from(result: EventResult) -> Self {
        AdverseEventReport::new(
            result
                .patient
                .into_iter()
                .flat_map(|patient| patient.reaction)
                .filter_map(|reaction| reaction.reactionmeddrapt),
        )
    }
}

/// Escapes a value for use inside a quoted openFDA search term.
pub fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

pub fn search_expression(drug_name: &str) -> String {
    format!(
        "patient.drug.medicinalproduct:\"{}\"",
        escape_query_value(drug_name)
    )
}

fn parse_reports(body: &str) -> Result<Vec<AdverseEventReport>, CoreError> {
    let response: EventResponse = serde_json::from_str(body).map_err(|e| {
        error!("Failed to parse openFDA response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse openFDA response: {}", e))
    })?;

    Ok(response
        .results
        .into_iter()
        .map(AdverseEventReport::from)
        .collect())
}

impl OpenFdaClient {
    pub fn new(config: OpenFdaConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                error!("Failed to build openFDA HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.filter(|key| !key.is_empty()),
            client,
        })
    }
}

impl AdverseEventClient for OpenFdaClient {
    async fn search_reports(
        &self,
        drug_name: &str,
        limit: u32,
    ) -> Result<Vec<AdverseEventReport>, CoreError> {
        let url = format!("{}/drug/event.json", self.base_url);
        let mut query = vec![
            ("search", search_expression(drug_name)),
            ("limit", limit.to_string()),
        ];
        if let Some(api_key) = &self.api_key {
            query.push(("api_key", api_key.clone()));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                error!("openFDA request failed: {}", e);
                CoreError::ExternalServiceError(format!("openFDA request failed: {}", e))
            })?;

        let status = response.status();
        // openFDA answers 404 when the search has no hits.
        if status == StatusCode::NOT_FOUND {
            debug!(drug = %drug_name, "no adverse-event reports");
            return Ok(Vec::new());
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("openFDA error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "openFDA returned error: {}",
                status
            )));
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed to read openFDA response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to read openFDA response: {}", e))
        })?;

        parse_reports(&body)
    }
}
