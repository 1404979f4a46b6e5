use serde::{Deserialize, Serialize};

/// Form body of `/Proms.validateCredentials`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateCredentialsRequest {
    pub date_of_birth: String,
    pub mrn: String,
    pub health_card: String,
}
