pub mod action;
pub mod directory;
pub mod entry;
