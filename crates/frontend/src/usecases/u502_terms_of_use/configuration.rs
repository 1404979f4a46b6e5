use super::api;
use crate::shared::config::use_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Admin card toggling whether patients must accept the Terms of Use.
#[component]
pub fn TermsConfiguration() -> impl IntoView {
    let config = use_config();
    let enabled = RwSignal::new(false);
    let fetched = RwSignal::new(false);
    let saved = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        let proms = config.with_value(|c| c.proms.clone());
        match api::fetch_terms(&proms).await {
            Ok(terms) => {
                enabled.set(terms.enabled);
                fetched.set(true);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    // Any edit after the initial load invalidates the "Saved" label.
    Effect::new(move |_| {
        enabled.track();
        saved.set(false);
    });

    let save = move |_| {
        let value = enabled.get_untracked();
        spawn_local(async move {
            let proms = config.with_value(|c| c.proms.clone());
            match api::save_configuration(&proms, value).await {
                Ok(()) => {
                    error.set(None);
                    saved.set(true);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <PageFrame page_id="u502_terms_of_use--config" category=PAGE_CAT_SYSTEM>
            <Card class="tou-config">
                <h3 class="tou-config__title">"Terms of Use configuration"</h3>
                {move || error.get().map(|e| view! { <p class="tou-config__error">{e}</p> })}
                <p class="tou-config__hint">
                    "Configuration for whether patients need to accept ToU before proceeding."
                </p>
                <Checkbox checked=enabled label="Patients need to accept ToU before proceeding" />
                <div class="tou-config__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Small
                        disabled=Signal::derive(move || !fetched.get())
                        on_click=save
                    >
                        {move || if saved.get() { "Saved" } else { "Save" }}
                    </Button>
                </div>
            </Card>
        </PageFrame>
    }
}
