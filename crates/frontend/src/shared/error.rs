//! Error taxonomy shared by every view.
//!
//! Each component keeps its own `Option<AppError>`; nothing here is fatal to
//! the application as a whole and nothing is retried automatically.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response.
    #[error("Error {status}: {status_text}")]
    Server { status: u16, status_text: String },

    /// Delete refused because other data still references the entry.
    #[error("{name} could not be removed. This can occur if completed forms reference this {entry_type}.")]
    Conflict { name: String, entry_type: String },

    /// Client-side input check; never reaches the network.
    #[error("{0}")]
    Validation(String),

    /// The body did not match the expected JSON shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The repository answered but reported a failure in its JSON envelope.
    #[error("{0}")]
    Rejected(String),
}

impl AppError {
    pub fn server(status: u16, status_text: impl Into<String>) -> Self {
        Self::Server {
            status,
            status_text: status_text.into(),
        }
    }

    pub fn conflict(name: impl Into<String>, entry_type: &str) -> Self {
        let entry_type = if entry_type.trim().is_empty() {
            "entry"
        } else {
            entry_type
        };
        Self::Conflict {
            name: name.into(),
            entry_type: entry_type.to_lowercase(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_interpolates_name() {
        let err = AppError::conflict("Visit 12", "Form");
        assert_eq!(
            err.to_string(),
            "Visit 12 could not be removed. This can occur if completed forms reference this form."
        );
    }

    #[test]
    fn test_conflict_without_entry_type() {
        let err = AppError::conflict("HP", "");
        assert!(err.to_string().ends_with("reference this entry."));
    }

    #[test]
    fn test_server_message() {
        let err = AppError::server(404, "Not Found");
        assert_eq!(err.to_string(), "Error 404: Not Found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(AppError::Network("offline".into()).status(), None);
    }
}
