pub mod api;
pub mod configuration;
pub mod dialog;
pub mod model;

pub use configuration::TermsConfiguration;
pub use dialog::TermsOfUseDialog;
