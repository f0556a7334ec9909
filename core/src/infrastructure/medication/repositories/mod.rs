pub mod medication_repository;
