use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    drug_log::{
        entities::{DrugLog, LoggedReaction},
        value_objects::{AdverseEventReport, CreateDrugLogInput},
    },
};

pub trait DrugLogService: Send + Sync {
    /// Persists the log, then compares the reaction with the reported terms.
    fn create_log(
        &self,
        input: CreateDrugLogInput,
    ) -> impl Future<Output = Result<LoggedReaction, CoreError>> + Send;

    fn list_logs(&self) -> impl Future<Output = Result<Vec<DrugLog>, CoreError>> + Send;

    fn delete_log(&self, log_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository trait for drug reaction logs
pub trait DrugLogRepository: Send + Sync {
    fn create_log(&self, log: DrugLog) -> impl Future<Output = Result<DrugLog, CoreError>> + Send;

    /// All logs, newest first.
    fn list_logs(&self) -> impl Future<Output = Result<Vec<DrugLog>, CoreError>> + Send;

    /// Fails with `CoreError::NotFound` when nothing was deleted.
    fn delete_log(&self, log_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Read-only lookup of reported adverse events for a drug
pub trait AdverseEventClient: Send + Sync {
    fn search_reports(
        &self,
        drug_name: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<AdverseEventReport>, CoreError>> + Send;
}
