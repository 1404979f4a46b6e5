//! Page category constants.
//!
//! Every page declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a001_form--list"`) and a `data-page-category` attribute.

/// Table of records with tabs, filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Dashboard composed of widgets.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Patient-facing flow (identification, landing).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Single entry with its own actions.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_DETAIL,
    PAGE_CAT_SYSTEM,
];

/// `{entity}--{category}` with both parts non-empty.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_form--list"));
        assert!(!is_valid_page_id("a001_form"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_DASHBOARD));
        assert!(is_known_category(PAGE_CAT_DETAIL));
        assert!(!is_known_category("legacy"));
    }
}
