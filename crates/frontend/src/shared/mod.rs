pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod error;
pub mod icons;
pub mod list;
pub mod modal_frame;
pub mod page_frame;
pub mod page_standard;
pub mod row_actions;
