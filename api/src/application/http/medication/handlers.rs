pub mod create_medication;
pub mod delete_medication;
pub mod get_adherence;
pub mod get_medications;
pub mod mark_dose_taken;
