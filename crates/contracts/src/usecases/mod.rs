pub mod u501_patient_identification;
pub mod u502_terms_of_use;
