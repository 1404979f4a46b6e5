//! Application top bar: sidebar toggle and title.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let title = use_config().with_value(|c| c.app.title.clone());

    view! {
        <div class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_left()
                title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
            >
                {icon("menu")}
            </button>
            <div class="top-header__brand">
                <span class="top-header__title">{title}</span>
            </div>
            <div class="top-header__page">
                {move || ctx.route.get().title()}
            </div>
        </div>
    }
}
