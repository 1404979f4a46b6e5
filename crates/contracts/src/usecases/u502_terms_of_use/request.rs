use serde::{Deserialize, Serialize};

/// Records that the patient accepted a given Terms of Use version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptTermsRequest {
    pub tou_accepted: String,
}

/// Admin switch for whether patients must accept the Terms of Use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsConfigurationRequest {
    pub enabled: bool,
}
