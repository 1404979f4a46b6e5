use crate::shared::serde_helpers::opt_string_or_number;
use serde::{Deserialize, Serialize};

/// Ontology header as served by BioPortal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteOntology {
    pub acronym: String,
    #[serde(default)]
    pub name: String,
}

/// One "latest submission" entry of the BioPortal ontology list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteVocabulary {
    pub ontology: RemoteOntology,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub version: Option<String>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A vocabulary node already installed in the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalVocabulary {
    pub identifier: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub version: Option<String>,
    #[serde(rename = "jcr:created", default)]
    pub created: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Source-independent view of a vocabulary, the shape every table row uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyDescriptor {
    pub acronym: String,
    pub name: String,
    pub version: Option<String>,
    pub released: Option<String>,
    pub installed: Option<String>,
    pub description: Option<String>,
}

impl VocabularyDescriptor {
    /// Installation date when known, release date otherwise.
    pub fn display_date(&self) -> Option<&str> {
        self.installed.as_deref().or(self.released.as_deref())
    }
}

impl From<RemoteVocabulary> for VocabularyDescriptor {
    fn from(v: RemoteVocabulary) -> Self {
        Self {
            acronym: v.ontology.acronym,
            name: v.ontology.name,
            version: v.version,
            released: v.released,
            installed: None,
            description: v.description.filter(|d| !d.trim().is_empty()),
        }
    }
}

impl From<LocalVocabulary> for VocabularyDescriptor {
    fn from(v: LocalVocabulary) -> Self {
        Self {
            acronym: v.identifier,
            name: v.name,
            version: v.version,
            released: v.created.clone(),
            installed: v.created,
            description: v.description.filter(|d| !d.trim().is_empty()),
        }
    }
}

/// Reply of the vocabulary install servlet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyActionResponse {
    #[serde(rename = "isSuccessful", default)]
    pub is_successful: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_local_vocabulary_reshaped() {
        let local: LocalVocabulary = serde_json::from_value(json!({
            "identifier": "HP",
            "name": "Human Phenotype Ontology",
            "version": "2021-10-10",
            "jcr:created": "2022-01-05T10:00:00.000-05:00"
        }))
        .unwrap();
        let d = VocabularyDescriptor::from(local);
        assert_eq!(d.acronym, "HP");
        assert_eq!(d.display_date(), Some("2022-01-05T10:00:00.000-05:00"));
        assert_eq!(d.description, None);
    }

    #[test]
    fn test_remote_vocabulary_reshaped() {
        let remote: RemoteVocabulary = serde_json::from_value(json!({
            "ontology": {"acronym": "MONDO", "name": "Mondo Disease Ontology"},
            "version": 3,
            "released": "2023-02-01T00:00:00-08:00",
            "description": "  "
        }))
        .unwrap();
        let d = VocabularyDescriptor::from(remote);
        assert_eq!(d.acronym, "MONDO");
        assert_eq!(d.version.as_deref(), Some("3"));
        assert_eq!(d.installed, None);
        assert_eq!(d.description, None);
    }

    #[test]
    fn test_action_response() {
        let r: VocabularyActionResponse =
            serde_json::from_str(r#"{"isSuccessful": false, "error": "Could not fetch"}"#).unwrap();
        assert!(!r.is_successful);
        assert_eq!(r.error.as_deref(), Some("Could not fetch"));
    }
}
