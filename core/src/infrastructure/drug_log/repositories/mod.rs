pub mod drug_log_repository;
