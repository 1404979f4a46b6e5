pub mod dashboard;

pub use dashboard::PromsDashboard;
