use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoute;
use crate::shared::config::use_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::*;

pub const USER_TYPE_PARAM: &str = "usertype";
pub const USER_TYPE_HCP: &str = "hcp";

/// Query string as a map; a malformed query reads as empty.
pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_else(|e| {
        log::warn!("Ignoring malformed query {:?}: {}", search, e);
        BTreeMap::new()
    })
}

pub fn query_param(search: &str, key: &str) -> Option<String> {
    parse_query(search).remove(key)
}

/// Set `key=value`, replacing any existing value, and re-encode the query.
pub fn replace_param(search: &str, key: &str, value: &str) -> String {
    let mut params = parse_query(search);
    params.insert(key.to_string(), value.to_string());
    serde_qs::to_string(&params).unwrap_or_default()
}

fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// "I am a..." chooser between the patient flow and provider sign-in.
#[component]
pub fn PromsLandingPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_config();
    let app_name = config.with_value(|c| c.app.title.clone());

    let is_open = query_param(&current_search(), USER_TYPE_PARAM).as_deref() != Some(USER_TYPE_HCP);
    let loading_patient = RwSignal::new(false);
    let loading_hcp = RwSignal::new(false);

    let choose_patient = move |_| {
        loading_patient.set(true);
        let entry = config.with_value(|c| c.proms.patient_entry.clone());
        ctx.navigate(AppRoute::from_path(&entry));
    };

    let choose_hcp = move |_| {
        loading_hcp.set(true);
        let search = replace_param(&current_search(), USER_TYPE_PARAM, USER_TYPE_HCP);
        log::info!("Reloading as health care provider");
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_search(&search) {
                log::error!("set_search failed: {:?}", e);
                loading_hcp.set(false);
            }
        }
    };

    view! {
        <PageFrame page_id="u503_proms_landing--main" category=PAGE_CAT_USECASE>
            <Show
                when=move || is_open
                fallback=|| view! { <div class="landing landing--hidden"></div> }
            >
                <div class="landing">
                    <img src="/libs/cards/resources/logo_light_bg.png" alt="" class="landing__logo" />
                    <h2>"I am a..."</h2>
                    <div class="landing__choices">
                        <Button
                            class="landing__choice"
                            appearance=ButtonAppearance::Primary
                            disabled=loading_patient
                            on_click=choose_patient
                        >
                            "Patient"
                        </Button>
                        {move || loading_patient.get().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
                        <Button
                            class="landing__choice"
                            disabled=loading_hcp
                            on_click=choose_hcp
                        >
                            "Health Care Provider"
                        </Button>
                        {move || loading_hcp.get().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
                    </div>
                    <div class="landing__info">{app_name.clone()}" by DATA"</div>
                </div>
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?usertype=hcp", USER_TYPE_PARAM).as_deref(), Some("hcp"));
        assert_eq!(query_param("?a=1&usertype=patient", USER_TYPE_PARAM).as_deref(), Some("patient"));
        assert_eq!(query_param("", USER_TYPE_PARAM), None);
    }

    #[test]
    fn test_replace_param_overrides_existing_value() {
        assert_eq!(replace_param("", USER_TYPE_PARAM, USER_TYPE_HCP), "usertype=hcp");
        assert_eq!(
            replace_param("?usertype=patient&lang=en", USER_TYPE_PARAM, USER_TYPE_HCP),
            "lang=en&usertype=hcp"
        );
        assert_eq!(
            query_param(&replace_param("?x=1", USER_TYPE_PARAM, USER_TYPE_HCP), USER_TYPE_PARAM).as_deref(),
            Some("hcp")
        );
    }
}
