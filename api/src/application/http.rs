pub mod drug_log;
pub mod health;
pub mod medication;
pub mod server;
