pub mod common;
pub mod dose_log;
pub mod drug_log;
pub mod health;
pub mod medication;
