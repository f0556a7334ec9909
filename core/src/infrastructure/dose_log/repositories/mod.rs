pub mod dose_log_repository;
