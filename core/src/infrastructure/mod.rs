pub mod clock;
pub mod db;
pub mod dose_log;
pub mod drug_log;
pub mod health;
pub mod medication;
pub mod openfda;
