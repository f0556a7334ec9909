//! In-memory adapters used by the service tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::MockClock, services::Service},
    dose_log::{entities::DoseLog, ports::DoseLogRepository},
    drug_log::{
        entities::DrugLog,
        ports::{AdverseEventClient, DrugLogRepository},
        value_objects::AdverseEventReport,
    },
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    medication::{entities::Medication, ports::MedicationRepository},
};

pub type TestService = Service<
    InMemoryDrugLogRepository,
    InMemoryMedicationRepository,
    InMemoryDoseLogRepository,
    StubAdverseEventClient,
    StubHealthCheckRepository,
    MockClock,
>;

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap()
}

/// Shared fakes plus the instant the service clock reports.
#[derive(Clone)]
pub struct TestHarness {
    pub now: DateTime<Utc>,
    pub drug_logs: InMemoryDrugLogRepository,
    pub medications: InMemoryMedicationRepository,
    pub dose_logs: InMemoryDoseLogRepository,
    pub adverse_events: StubAdverseEventClient,
    pub health: StubHealthCheckRepository,
}

impl TestHarness {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            drug_logs: InMemoryDrugLogRepository::default(),
            medications: InMemoryMedicationRepository::default(),
            dose_logs: InMemoryDoseLogRepository::default(),
            adverse_events: StubAdverseEventClient::default(),
            health: StubHealthCheckRepository::default(),
        }
    }

    /// Same stores, different clock.
    pub fn at(&self, now: DateTime<Utc>) -> Self {
        Self {
            now,
            ..self.clone()
        }
    }

    pub fn service(&self) -> TestService {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(self.now);

        Service::new(
            self.drug_logs.clone(),
            self.medications.clone(),
            self.dose_logs.clone(),
            self.adverse_events.clone(),
            self.health.clone(),
            clock,
        )
    }
}

#[derive(Default)]
struct DrugLogState {
    rows: Vec<DrugLog>,
    failure: Option<String>,
}

#[derive(Clone, Default)]
pub struct InMemoryDrugLogRepository {
    state: Arc<Mutex<DrugLogState>>,
}

impl InMemoryDrugLogRepository {
    pub fn fail_with(&self, message: &str) {
        self.state.lock().unwrap().failure = Some(message.to_string());
    }

    fn check(state: &DrugLogState) -> Result<(), CoreError> {
        match &state.failure {
            Some(message) => Err(CoreError::Storage(message.clone())),
            None => Ok(()),
        }
    }
}

impl DrugLogRepository for InMemoryDrugLogRepository {
    async fn create_log(&self, log: DrugLog) -> Result<DrugLog, CoreError> {
        let mut state = self.state.lock().unwrap();
        Self::check(&state)?;
        state.rows.push(log.clone());
        Ok(log)
    }

    async fn list_logs(&self) -> Result<Vec<DrugLog>, CoreError> {
        let state = self.state.lock().unwrap();
        Self::check(&state)?;
        let mut rows = state.rows.clone();
        rows.reverse();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn delete_log(&self, log_id: Uuid) -> Result<(), CoreError> {
        let mut state = self.state.lock().unwrap();
        Self::check(&state)?;
        let before = state.rows.len();
        state.rows.retain(|row| row.id != log_id);
        if state.rows.len() == before {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryMedicationRepository {
    rows: Arc<Mutex<Vec<Medication>>>,
}

impl InMemoryMedicationRepository {
    pub fn all(&self) -> Vec<Medication> {
        self.rows.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.rows.lock().unwrap().clear();
    }
}

impl MedicationRepository for InMemoryMedicationRepository {
    async fn create_medication(&self, medication: Medication) -> Result<Medication, CoreError> {
        self.rows.lock().unwrap().push(medication.clone());
        Ok(medication)
    }

    async fn get_by_id(&self, medication_id: Uuid) -> Result<Option<Medication>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == medication_id)
            .cloned())
    }

    async fn list_medications(&self) -> Result<Vec<Medication>, CoreError> {
        // Insertion order breaks ties between equal timestamps.
        let mut rows = self.all();
        rows.reverse();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn delete_medication(&self, medication_id: Uuid) -> Result<(), CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != medication_id);
        if rows.len() == before {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
struct DoseLogState {
    rows: Vec<DoseLog>,
    preempt_with: Option<i32>,
}

/// Every mutation happens under one lock, like a single-row update.
#[derive(Clone, Default)]
pub struct InMemoryDoseLogRepository {
    state: Arc<Mutex<DoseLogState>>,
}

impl InMemoryDoseLogRepository {
    pub fn all_rows(&self) -> Vec<DoseLog> {
        self.state.lock().unwrap().rows.clone()
    }

    pub fn rows_for(&self, medication_id: Uuid) -> Vec<DoseLog> {
        self.all_rows()
            .into_iter()
            .filter(|row| row.medication_id == medication_id)
            .collect()
    }

    /// The next create loses to a concurrent writer that already counted
    /// `taken_count` doses.
    pub fn preempt_next_create(&self, taken_count: i32) {
        self.state.lock().unwrap().preempt_with = Some(taken_count);
    }
}

impl DoseLogRepository for InMemoryDoseLogRepository {
    async fn find_for_day(
        &self,
        medication_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<DoseLog>, CoreError> {
        tokio::task::yield_now().await;

        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|row| row.medication_id == medication_id && row.date == date)
            .cloned())
    }

    async fn create_dose_log(&self, dose_log: DoseLog) -> Result<DoseLog, CoreError> {
        let mut state = self.state.lock().unwrap();

        if let Some(taken_count) = state.preempt_with.take() {
            state.rows.push(DoseLog {
                taken_count,
                ..dose_log
            });
            return Err(CoreError::AlreadyExists);
        }

        let exists = state
            .rows
            .iter()
            .any(|row| row.medication_id == dose_log.medication_id && row.date == dose_log.date);
        if exists {
            return Err(CoreError::AlreadyExists);
        }

        state.rows.push(dose_log.clone());
        Ok(dose_log)
    }

    async fn increment_taken(
        &self,
        medication_id: Uuid,
        date: NaiveDate,
        cap: i32,
    ) -> Result<Option<DoseLog>, CoreError> {
        let mut state = self.state.lock().unwrap();

        Ok(state
            .rows
            .iter_mut()
            .find(|row| row.medication_id == medication_id && row.date == date)
            .filter(|row| row.taken_count < cap)
            .map(|row| {
                row.taken_count += 1;
                row.updated_at = Utc::now();
                row.clone()
            }))
    }

    async fn list_for_day(&self, date: NaiveDate) -> Result<Vec<DoseLog>, CoreError> {
        Ok(self
            .all_rows()
            .into_iter()
            .filter(|row| row.date == date)
            .collect())
    }

    async fn delete_for_medication(&self, medication_id: Uuid) -> Result<u64, CoreError> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|row| row.medication_id != medication_id);
        Ok((before - state.rows.len()) as u64)
    }
}

#[derive(Default)]
struct AdverseEventState {
    response: Option<Result<Vec<AdverseEventReport>, CoreError>>,
    requests: Vec<(String, u32)>,
}

/// Answers every lookup with the configured response, or no reports.
#[derive(Clone, Default)]
pub struct StubAdverseEventClient {
    state: Arc<Mutex<AdverseEventState>>,
}

impl StubAdverseEventClient {
    pub fn respond_with(&self, response: Result<Vec<AdverseEventReport>, CoreError>) {
        self.state.lock().unwrap().response = Some(response);
    }

    pub fn requested(&self) -> Vec<(String, u32)> {
        self.state.lock().unwrap().requests.clone()
    }
}

impl AdverseEventClient for StubAdverseEventClient {
    async fn search_reports(
        &self,
        drug_name: &str,
        limit: u32,
    ) -> Result<Vec<AdverseEventReport>, CoreError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push((drug_name.to_string(), limit));
        state.response.clone().unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[derive(Clone, Default)]
pub struct StubHealthCheckRepository {
    down: Arc<Mutex<bool>>,
}

impl StubHealthCheckRepository {
    pub fn set_down(&self) {
        *self.down.lock().unwrap() = true;
    }

    fn check(&self) -> Result<(), CoreError> {
        if *self.down.lock().unwrap() {
            return Err(CoreError::InternalServerError);
        }
        Ok(())
    }
}

impl HealthCheckRepository for StubHealthCheckRepository {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.check()?;
        Ok(DatabaseHealthStatus {
            status: "healthy".to_string(),
            response_time_ms: 1,
        })
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.check()?;
        Ok(1)
    }
}
