use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod fakes;

#[derive(Clone, Debug)]
pub struct MedtrackConfig {
    pub database: DatabaseConfig,
    pub openfda: OpenFdaConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct OpenFdaConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

/// The dose-day an instant falls on. Day boundaries are 00:00 UTC.
pub fn utc_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

pub fn start_of_utc_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()
}
