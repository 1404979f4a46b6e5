pub mod filter_panel;
pub mod pagination_controls;

pub use filter_panel::{FilterPanel, FilterTag};
pub use pagination_controls::{PageWindow, PaginationControls, DEFAULT_PAGE_SIZES};
