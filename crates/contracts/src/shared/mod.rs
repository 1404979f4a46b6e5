pub mod content;
pub mod serde_helpers;

pub use content::{ListResponse, Page, Row};
