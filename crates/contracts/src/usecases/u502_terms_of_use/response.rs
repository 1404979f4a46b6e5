use crate::shared::serde_helpers::{bool_or_string, opt_string_or_number};
use serde::{Deserialize, Serialize};

/// Accepted version stored for a patient who never accepted any terms.
pub const NO_ACCEPTED_VERSION: &str = "none";

/// The Terms of Use document node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermsOfUse {
    #[serde(rename = "@path", default)]
    pub path: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub enabled: bool,
}

/// Reply of `/Proms.termsOfUse`, both for reads and for recording acceptance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsStatusResponse {
    pub status: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub tou_accepted: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TermsStatusResponse {
    pub fn is_success(&self) -> bool {
        self.status == crate::usecases::u501_patient_identification::response::STATUS_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_document() {
        let tou: TermsOfUse = serde_json::from_str(
            r#"{"@path": "/Proms/TermsOfUse", "title": "Terms", "text": "Be nice", "version": 2, "enabled": true}"#,
        )
        .unwrap();
        assert_eq!(tou.version.as_deref(), Some("2"));
        assert!(tou.enabled);
    }

    #[test]
    fn test_status_response() {
        let resp: TermsStatusResponse =
            serde_json::from_str(r#"{"status": "success", "tou_accepted": "none"}"#).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.tou_accepted.as_deref(), Some(NO_ACCEPTED_VERSION));

        let resp: TermsStatusResponse =
            serde_json::from_str(r#"{"status": "error", "error": "No patient"}"#).unwrap();
        assert!(!resp.is_success());
    }
}
