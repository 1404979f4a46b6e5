//! Installed/available vocabularies and the per-acronym install phase.

use crate::shared::error::AppResult;
use contracts::domain::a002_vocabulary::VocabularyDescriptor;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotInstalled,
    Installing,
    UpdateAvailable,
    Uninstalling,
    Latest,
}

impl Phase {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Installing | Self::Uninstalling)
    }
}

/// Phase of a vocabulary given the installed and the published version.
pub fn initial_phase(installed: Option<&str>, published: Option<&str>) -> Phase {
    match (installed, published) {
        (None, _) => Phase::NotInstalled,
        (Some(_), None) => Phase::Latest,
        (Some(local), Some(remote)) if local == remote => Phase::Latest,
        (Some(_), Some(_)) => Phase::UpdateAvailable,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyOp {
    Install,
    Uninstall,
}

impl VocabularyOp {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Install => "Install",
            Self::Uninstall => "Uninstall",
        }
    }
}

/// Loading status of one vocabulary list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DirectoryStatus {
    #[default]
    Init,
    Loading,
    Error(String),
    Loaded,
}

/// Error shown after a failed install or uninstall.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationFailure {
    pub op: VocabularyOp,
    pub name: String,
    pub version: Option<String>,
    pub message: String,
}

impl OperationFailure {
    pub fn title(&self) -> String {
        format!("Failed to {}", self.op.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabularyCatalog {
    pub local: Vec<VocabularyDescriptor>,
    pub remote: Vec<VocabularyDescriptor>,
    phases: BTreeMap<String, Phase>,
}

impl VocabularyCatalog {
    pub fn set_local(&mut self, local: Vec<VocabularyDescriptor>) {
        self.local = local;
        self.rebuild_phases();
    }

    pub fn set_remote(&mut self, remote: Vec<VocabularyDescriptor>) {
        self.remote = remote;
        self.rebuild_phases();
    }

    /// Phases of vocabularies that are mid-operation are kept.
    fn rebuild_phases(&mut self) {
        let mut acronyms: Vec<&str> = self.local.iter().map(|v| v.acronym.as_str()).collect();
        acronyms.extend(self.remote.iter().map(|v| v.acronym.as_str()));
        let mut phases = BTreeMap::new();
        for acronym in acronyms {
            let current = self.phases.get(acronym).copied();
            let phase = match current {
                Some(p) if p.is_busy() => p,
                _ => initial_phase(
                    self.local_version(acronym).flatten(),
                    self.remote_version(acronym).flatten(),
                ),
            };
            phases.insert(acronym.to_string(), phase);
        }
        self.phases = phases;
    }

    fn local_version(&self, acronym: &str) -> Option<Option<&str>> {
        self.local
            .iter()
            .find(|v| v.acronym == acronym)
            .map(|v| Some(v.version.as_deref().unwrap_or_default()))
    }

    fn remote_version(&self, acronym: &str) -> Option<Option<&str>> {
        self.remote
            .iter()
            .find(|v| v.acronym == acronym)
            .map(|v| v.version.as_deref())
    }

    pub fn phase(&self, acronym: &str) -> Phase {
        self.phases.get(acronym).copied().unwrap_or(Phase::NotInstalled)
    }

    /// Enter the in-flight phase. Returns the phase to restore on failure,
    /// or `None` when the operation is not allowed from the current phase.
    pub fn begin(&mut self, acronym: &str, op: VocabularyOp) -> Option<Phase> {
        let old = self.phase(acronym);
        let next = match (op, old) {
            (VocabularyOp::Install, Phase::NotInstalled | Phase::UpdateAvailable) => Phase::Installing,
            (VocabularyOp::Uninstall, Phase::Latest | Phase::UpdateAvailable) => Phase::Uninstalling,
            _ => return None,
        };
        self.phases.insert(acronym.to_string(), next);
        Some(old)
    }

    /// Settle an operation. Success updates the installed list; failure
    /// restores `old`.
    pub fn finish(
        &mut self,
        vocabulary: &VocabularyDescriptor,
        op: VocabularyOp,
        old: Phase,
        result: AppResult<()>,
    ) -> Option<OperationFailure> {
        let acronym = vocabulary.acronym.clone();
        match result {
            Ok(()) => {
                match op {
                    VocabularyOp::Install => {
                        self.local.retain(|v| v.acronym != acronym);
                        self.local.push(vocabulary.clone());
                        self.phases.insert(acronym, Phase::Latest);
                    }
                    VocabularyOp::Uninstall => {
                        self.local.retain(|v| v.acronym != acronym);
                        self.phases.insert(acronym, Phase::NotInstalled);
                    }
                }
                None
            }
            Err(e) => {
                self.phases.insert(acronym, old);
                Some(OperationFailure {
                    op,
                    name: vocabulary.name.clone(),
                    version: vocabulary.version.clone(),
                    message: e.to_string(),
                })
            }
        }
    }
}

/// Case-insensitive match on acronym or name; blank matches everything.
pub fn matches_filter(vocabulary: &VocabularyDescriptor, filter: &str) -> bool {
    let filter = filter.trim().to_lowercase();
    filter.is_empty()
        || vocabulary.acronym.to_lowercase().contains(&filter)
        || vocabulary.name.to_lowercase().contains(&filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::AppError;

    fn vocab(acronym: &str, version: Option<&str>) -> VocabularyDescriptor {
        VocabularyDescriptor {
            acronym: acronym.into(),
            name: format!("{acronym} ontology"),
            version: version.map(str::to_string),
            released: None,
            installed: None,
            description: None,
        }
    }

    #[test]
    fn test_initial_phase() {
        assert_eq!(initial_phase(None, Some("1")), Phase::NotInstalled);
        assert_eq!(initial_phase(Some("1"), Some("1")), Phase::Latest);
        assert_eq!(initial_phase(Some("1"), Some("2")), Phase::UpdateAvailable);
        assert_eq!(initial_phase(Some("1"), None), Phase::Latest);
    }

    #[test]
    fn test_catalog_phases_from_both_lists() {
        let mut catalog = VocabularyCatalog::default();
        catalog.set_remote(vec![vocab("HP", Some("2")), vocab("MONDO", Some("1")), vocab("GO", Some("5"))]);
        catalog.set_local(vec![vocab("HP", Some("1")), vocab("MONDO", Some("1"))]);
        assert_eq!(catalog.phase("HP"), Phase::UpdateAvailable);
        assert_eq!(catalog.phase("MONDO"), Phase::Latest);
        assert_eq!(catalog.phase("GO"), Phase::NotInstalled);
    }

    #[test]
    fn test_install_success_adds_local() {
        let mut catalog = VocabularyCatalog::default();
        let go = vocab("GO", Some("5"));
        catalog.set_remote(vec![go.clone()]);

        let old = catalog.begin("GO", VocabularyOp::Install).unwrap();
        assert_eq!(catalog.phase("GO"), Phase::Installing);
        assert_eq!(catalog.begin("GO", VocabularyOp::Install), None);

        assert_eq!(catalog.finish(&go, VocabularyOp::Install, old, Ok(())), None);
        assert_eq!(catalog.phase("GO"), Phase::Latest);
        assert_eq!(catalog.local.len(), 1);
    }

    #[test]
    fn test_install_failure_restores_phase() {
        let mut catalog = VocabularyCatalog::default();
        let hp = vocab("HP", Some("2"));
        catalog.set_remote(vec![hp.clone()]);
        catalog.set_local(vec![vocab("HP", Some("1"))]);

        let old = catalog.begin("HP", VocabularyOp::Install).unwrap();
        let failure = catalog
            .finish(&hp, VocabularyOp::Install, old, Err(AppError::Rejected("Could not fetch".into())))
            .unwrap();
        assert_eq!(catalog.phase("HP"), Phase::UpdateAvailable);
        assert_eq!(failure.title(), "Failed to Install");
        assert_eq!(failure.message, "Could not fetch");
    }

    #[test]
    fn test_uninstall() {
        let mut catalog = VocabularyCatalog::default();
        let hp = vocab("HP", Some("1"));
        catalog.set_local(vec![hp.clone()]);
        assert_eq!(catalog.begin("HP", VocabularyOp::Install), None);

        let old = catalog.begin("HP", VocabularyOp::Uninstall).unwrap();
        let failure = catalog
            .finish(&hp, VocabularyOp::Uninstall, old, Err(AppError::server(403, "Forbidden")))
            .unwrap();
        assert_eq!(failure.message, "Error 403: Forbidden");
        assert_eq!(catalog.phase("HP"), Phase::Latest);

        let old = catalog.begin("HP", VocabularyOp::Uninstall).unwrap();
        catalog.finish(&hp, VocabularyOp::Uninstall, old, Ok(()));
        assert_eq!(catalog.phase("HP"), Phase::NotInstalled);
        assert!(catalog.local.is_empty());
    }

    #[test]
    fn test_busy_phase_survives_reload() {
        let mut catalog = VocabularyCatalog::default();
        catalog.set_remote(vec![vocab("GO", Some("5"))]);
        catalog.begin("GO", VocabularyOp::Install);
        catalog.set_local(vec![]);
        assert_eq!(catalog.phase("GO"), Phase::Installing);
    }

    #[test]
    fn test_filter() {
        let hp = vocab("HP", None);
        assert!(matches_filter(&hp, ""));
        assert!(matches_filter(&hp, "hp"));
        assert!(matches_filter(&hp, "ONTOLOGY"));
        assert!(!matches_filter(&hp, "mondo"));
    }
}
