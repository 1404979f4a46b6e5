//! Paged view onto a remote collection.
//!
//! Requests are tagged with a generation number; only the result of the most
//! recently issued request is ever applied. A failed load keeps the last good
//! page on screen and raises a separate error flag.

use crate::shared::api_utils::get_json;
use crate::shared::error::{AppError, AppResult};
use contracts::shared::{ListResponse, Page, Row};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteListState<T> {
    pub page: Page<T>,
    pub error: Option<AppError>,
    pub loading: bool,
    generation: u64,
}

impl<T> Default for RemoteListState<T> {
    fn default() -> Self {
        Self {
            page: Page::default(),
            error: None,
            loading: false,
            generation: 0,
        }
    }
}

impl<T> RemoteListState<T> {
    /// Issue a new generation; earlier outstanding requests become stale.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a finished request. Returns `false` when the result was stale
    /// and dropped.
    pub fn apply(&mut self, generation: u64, result: AppResult<Page<T>>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.page = page;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
        true
    }
}

/// Fetch one window of a collection.
pub async fn load<T: DeserializeOwned>(url: &str, offset: usize, limit: usize) -> AppResult<Page<T>> {
    let response: ListResponse<T> = get_json(url).await?;
    let page = Page::from_response(response, offset, limit);
    if !page.is_consistent() {
        log::debug!(
            "{}: page window {}+{} exceeds total {}",
            url,
            page.offset,
            page.rows.len(),
            page.total
        );
    }
    Ok(page)
}

/// Reactive handle used by list views.
#[derive(Clone, Copy)]
pub struct RemoteListModel {
    pub state: RwSignal<RemoteListState<Row>>,
}

impl RemoteListModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(RemoteListState::default()),
        }
    }

    pub fn fetch(&self, url: String, offset: usize, limit: usize) {
        let state = self.state;
        let generation = state.try_update(|s| s.begin()).unwrap_or_default();
        spawn_local(async move {
            let result = load::<Row>(&url, offset, limit).await;
            if let Err(e) = &result {
                log::error!("Loading {} failed: {}", url, e);
            }
            state.update(|s| {
                if !s.apply(generation, result) {
                    log::debug!("Dropped stale list response (generation {})", generation);
                }
            });
        });
    }

    pub fn rows(&self) -> Vec<Row> {
        self.state.with(|s| s.page.rows.clone())
    }
}

impl Default for RemoteListModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(names: &[&str], total: usize) -> Page<Row> {
        Page {
            rows: names.iter().map(|n| Row::new(format!("/Forms/{n}"), *n)).collect(),
            total,
            offset: 0,
            limit: 10,
        }
    }

    #[test]
    fn test_last_request_wins() {
        let mut state = RemoteListState::<Row>::default();
        let first = state.begin();
        let second = state.begin();

        assert!(state.apply(second, Ok(page(&["b"], 1))));
        assert!(!state.loading);
        assert!(!state.apply(first, Ok(page(&["a"], 1))));
        assert_eq!(state.page.rows[0].name, "b");
    }

    #[test]
    fn test_stale_response_keeps_loading_flag() {
        let mut state = RemoteListState::<Row>::default();
        let first = state.begin();
        let _second = state.begin();
        state.apply(first, Ok(page(&["a"], 1)));
        assert!(state.loading);
        assert!(state.page.is_empty());
    }

    #[test]
    fn test_failure_keeps_previous_page() {
        let mut state = RemoteListState::<Row>::default();
        let g = state.begin();
        state.apply(g, Ok(page(&["a", "b"], 2)));

        let g = state.begin();
        state.apply(g, Err(AppError::server(503, "Service Unavailable")));
        assert_eq!(state.page.rows.len(), 2);
        assert_eq!(state.error, Some(AppError::server(503, "Service Unavailable")));

        let g = state.begin();
        state.apply(g, Ok(page(&["c"], 1)));
        assert_eq!(state.error, None);
        assert_eq!(state.page.rows.len(), 1);
    }
}
