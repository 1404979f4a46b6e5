//! Wire contracts between the browser client and the content repository.
//!
//! Everything in here is plain serde data: the repository speaks JSON on
//! reads and form-encoded bodies on writes.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;
