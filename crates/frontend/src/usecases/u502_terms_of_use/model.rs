use crate::shared::error::AppError;
use contracts::usecases::u502_terms_of_use::response::NO_ACCEPTED_VERSION;

pub const LOAD_FAILED: &str = "Loading the Terms of Use failed, please try again later";
pub const DECLINE_WARNING: &str =
    "You can only fill out your pre-appointment surveys online after accepting the DATA PRO Terms of Use.";

/// What the patient has to do before continuing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermsGate {
    AlreadyAccepted,
    /// Never accepted any version.
    FirstTime,
    /// Accepted an older version.
    Updated,
}

pub fn evaluate_gate(accepted: &str, document_version: Option<&str>) -> TermsGate {
    if document_version == Some(accepted) {
        TermsGate::AlreadyAccepted
    } else if accepted == NO_ACCEPTED_VERSION {
        TermsGate::FirstTime
    } else {
        TermsGate::Updated
    }
}

/// Optional headline and body of the notice shown above the document.
pub fn gate_notice(gate: TermsGate) -> Option<(Option<&'static str>, &'static str)> {
    match gate {
        TermsGate::AlreadyAccepted => None,
        TermsGate::FirstTime => Some((
            None,
            "Please read the Terms of Use and click Accept at the bottom to continue.",
        )),
        TermsGate::Updated => Some((
            Some("The Terms of Use have been updated"),
            "Please review and accept the new Terms of Use to continue.",
        )),
    }
}

pub fn acceptance_failure(err: &AppError) -> String {
    match err {
        AppError::Server {
            status,
            status_text,
        } => format!(
            "Recording acceptance of Terms of Use failed with error code {status}: {status_text}"
        ),
        other => format!("Recording acceptance of Terms of Use failed: {other}"),
    }
}

/// Split the document into paragraphs on blank lines.
pub fn paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate() {
        assert_eq!(evaluate_gate("3", Some("3")), TermsGate::AlreadyAccepted);
        assert_eq!(evaluate_gate("none", Some("3")), TermsGate::FirstTime);
        assert_eq!(evaluate_gate("2", Some("3")), TermsGate::Updated);
        assert_eq!(evaluate_gate("2", None), TermsGate::Updated);
    }

    #[test]
    fn test_notice() {
        assert_eq!(gate_notice(TermsGate::AlreadyAccepted), None);
        let (title, _) = gate_notice(TermsGate::Updated).unwrap();
        assert_eq!(title, Some("The Terms of Use have been updated"));
        let (title, body) = gate_notice(TermsGate::FirstTime).unwrap();
        assert!(title.is_none());
        assert!(body.starts_with("Please read the Terms of Use"));
    }

    #[test]
    fn test_acceptance_failure_message() {
        assert_eq!(
            acceptance_failure(&AppError::server(500, "Internal Server Error")),
            "Recording acceptance of Terms of Use failed with error code 500: Internal Server Error"
        );
        assert_eq!(
            acceptance_failure(&AppError::Rejected("No patient".into())),
            "Recording acceptance of Terms of Use failed: No patient"
        );
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(
            paragraphs("First.\n\n\n\nSecond\nline.\n\n"),
            vec!["First.".to_string(), "Second\nline.".to_string()]
        );
    }
}
