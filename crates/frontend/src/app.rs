use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    provide_context(AppGlobalContext::new(config.app.root_route.clone()));
    provide_context(StoredValue::new(config));

    view! {
        <AppRoutes />
    }
}
