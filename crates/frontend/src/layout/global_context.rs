use crate::routes::routes::AppRoute;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Where "go back" leads after an entry was deleted from its own page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackNavigation {
    Back,
    ReplaceWithRoot,
}

/// `history.length` counts the current entry; more than two means there is
/// an in-app page to return to.
pub fn back_navigation(history_length: u32) -> BackNavigation {
    if history_length > 2 {
        BackNavigation::Back
    } else {
        BackNavigation::ReplaceWithRoot
    }
}

fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<AppRoute>,
    pub left_open: RwSignal<bool>,
    pub root_route: StoredValue<String>,
}

impl AppGlobalContext {
    pub fn new(root_route: String) -> Self {
        Self {
            route: RwSignal::new(AppRoute::from_path(&current_pathname())),
            left_open: RwSignal::new(true),
            root_route: StoredValue::new(root_route),
        }
    }

    /// Follow browser back/forward.
    pub fn init_router_integration(&self) {
        let route = self.route;
        let handle = window_event_listener(ev::popstate, move |_| {
            let next = AppRoute::from_path(&current_pathname());
            leptos::logging::log!("popstate -> {:?}", next);
            route.set(next);
        });
        on_cleanup(move || handle.remove());
    }

    pub fn navigate(&self, route: AppRoute) {
        let path = route.path();
        leptos::logging::log!("navigate: {}", path);
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&path)) {
                log::warn!("pushState failed: {:?}", e);
            }
        }
        self.route.set(route);
    }

    pub fn replace(&self, path: &str) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
                log::warn!("replaceState failed: {:?}", e);
            }
        }
        self.route.set(AppRoute::from_path(path));
    }

    pub fn go_back_or_root(&self) {
        let Some(history) = window().and_then(|w| w.history().ok()) else {
            return;
        };
        let length = history.length().unwrap_or(0);
        match back_navigation(length) {
            BackNavigation::Back => {
                if let Err(e) = history.back() {
                    log::warn!("history.back failed: {:?}", e);
                }
            }
            BackNavigation::ReplaceWithRoot => self.replace(&self.root_route.get_value()),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_navigation_threshold() {
        assert_eq!(back_navigation(1), BackNavigation::ReplaceWithRoot);
        assert_eq!(back_navigation(2), BackNavigation::ReplaceWithRoot);
        assert_eq!(back_navigation(3), BackNavigation::Back);
    }
}
