use crate::shared::error::{AppError, AppResult};
use contracts::usecases::u501_patient_identification::{
    request::ValidateCredentialsRequest,
    response::{IdentifiedPatient, PatientInformation},
};
use serde_json::Value;

pub const MISSING_FIELDS: &str =
    "Date of birth and either MRN or Health Card Number are required for patient identification";

/// Uppercase and keep only `A-Z0-9`, so "2345 678 901 xy" becomes "2345678901XY".
pub fn sanitize_health_card(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentificationForm {
    pub date_of_birth: String,
    pub mrn: String,
    pub health_card: String,
}

impl IdentificationForm {
    /// Date of birth plus at least one of MRN / health card.
    pub fn validate(&self) -> AppResult<ValidateCredentialsRequest> {
        let dob = self.date_of_birth.trim();
        let mrn = self.mrn.trim();
        let health_card = sanitize_health_card(&self.health_card);
        if dob.is_empty() || (mrn.is_empty() && health_card.is_empty()) {
            return Err(AppError::Validation(MISSING_FIELDS.to_string()));
        }
        Ok(ValidateCredentialsRequest {
            date_of_birth: dob.to_string(),
            mrn: mrn.to_string(),
            health_card,
        })
    }
}

/// Identification and Terms of Use acceptance arrive independently; the
/// patient is through once both are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentificationProgress {
    pub visit: Option<Value>,
    pub patient: Option<PatientInformation>,
    pub terms_accepted: bool,
}

impl IdentificationProgress {
    pub fn identified(&mut self, patient: PatientInformation, visit: Value) {
        self.patient = Some(patient);
        self.visit = Some(visit);
    }

    /// Declining the terms forgets who was identified.
    pub fn clear(&mut self) {
        self.patient = None;
        self.visit = None;
    }

    pub fn awaiting_terms(&self) -> bool {
        self.visit.is_some() && !self.terms_accepted
    }

    pub fn completed(&self) -> Option<IdentifiedPatient> {
        if !self.terms_accepted {
            return None;
        }
        Some(IdentifiedPatient {
            subject: self.visit.clone()?,
            patient: self.patient.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_health_card() {
        assert_eq!(sanitize_health_card("2345 678 901 xy"), "2345678901XY");
        assert_eq!(sanitize_health_card("--"), "");
    }

    #[test]
    fn test_validate_requires_dob_and_identifier() {
        let mut form = IdentificationForm {
            date_of_birth: "1970-01-01".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(AppError::Validation(MISSING_FIELDS.to_string()))
        );

        form.health_card = "2345-678-901 ab".into();
        let request = form.validate().unwrap();
        assert_eq!(request.health_card, "2345678901AB");
        assert_eq!(request.mrn, "");

        form.date_of_birth.clear();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_mrn_alone_is_enough() {
        let form = IdentificationForm {
            date_of_birth: "1970-01-01".into(),
            mrn: "1234567".into(),
            health_card: String::new(),
        };
        assert_eq!(form.validate().unwrap().mrn, "1234567");
    }

    #[test]
    fn test_progress_needs_both_parts() {
        let mut progress = IdentificationProgress::default();
        progress.terms_accepted = true;
        assert!(progress.completed().is_none());

        progress.identified(PatientInformation::default(), json!({"@path": "/Subjects/v1"}));
        let done = progress.completed().unwrap();
        assert_eq!(done.subject["@path"], "/Subjects/v1");
    }

    #[test]
    fn test_decline_clears_identification() {
        let mut progress = IdentificationProgress::default();
        progress.identified(PatientInformation::default(), json!("visit"));
        assert!(progress.awaiting_terms());
        progress.clear();
        assert!(!progress.awaiting_terms());
        assert!(progress.completed().is_none());
    }
}
