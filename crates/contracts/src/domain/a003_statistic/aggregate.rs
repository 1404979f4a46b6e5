use serde::{Deserialize, Serialize};

/// Reference to a questionnaire variable by its node uuid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableRef {
    #[serde(rename = "jcr:uuid")]
    pub uuid: String,
}

/// Statistic definition node (`cards:Statistic`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticDefinition {
    #[serde(rename = "@path", default)]
    pub path: String,
    pub name: String,
    #[serde(rename = "xVar")]
    pub x_var: VariableRef,
    #[serde(rename = "yVar")]
    pub y_var: VariableRef,
}

/// Computed statistic as returned by `/Statistics.query`; kept opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticResult {
    /// Path of the definition this result was computed from.
    pub path: String,
    pub name: String,
    pub body: serde_json::Value,
}
