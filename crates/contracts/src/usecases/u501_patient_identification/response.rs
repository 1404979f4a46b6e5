use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const STATUS_SUCCESS: &str = "success";

/// Demographics the repository returns once the credentials match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientInformation {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub mrn: Option<String>,
    #[serde(default)]
    pub health_card: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateCredentialsResponse {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(rename = "patientInformation", default)]
    pub patient_information: Option<PatientInformation>,
    /// The visit subject the patient is answering surveys for.
    #[serde(rename = "sessionSubject", default)]
    pub session_subject: Option<Value>,
}

impl ValidateCredentialsResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// What the identification flow hands to the rest of the patient UI.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifiedPatient {
    pub subject: Value,
    pub patient: PatientInformation,
}
