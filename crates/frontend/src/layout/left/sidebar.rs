//! Admin navigation.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoute;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct MenuItem {
    route: AppRoute,
    icon: &'static str,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem { route: AppRoute::Forms, icon: "forms" },
        MenuItem { route: AppRoute::Vocabularies, icon: "vocabulary" },
        MenuItem { route: AppRoute::Statistics, icon: "statistics" },
        MenuItem { route: AppRoute::TermsConfiguration, icon: "shield" },
        MenuItem { route: AppRoute::PatientIdentification, icon: "user" },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            {menu_items().into_iter().map(|item| {
                let route = item.route.clone();
                let target = item.route.clone();
                let href = item.route.path();
                view! {
                    <a
                        href=href
                        class=move || {
                            if ctx.route.get() == route {
                                "sidebar__item sidebar__item--active"
                            } else {
                                "sidebar__item"
                            }
                        }
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(target.clone());
                        }
                    >
                        {icon(item.icon)}
                        <span class="sidebar__label">{item.route.title()}</span>
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
