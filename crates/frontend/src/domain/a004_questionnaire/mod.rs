pub mod number;
pub mod ui;
