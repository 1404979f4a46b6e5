use super::api;
use super::model::{
    acceptance_failure, evaluate_gate, gate_notice, paragraphs, TermsGate, DECLINE_WARNING,
    LOAD_FAILED,
};
use crate::shared::config::use_config;
use crate::shared::modal_frame::ModalFrame;
use contracts::usecases::u502_terms_of_use::response::TermsOfUse;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Terms of Use document with an optional accept/decline gate.
///
/// When `action_required` is set and the patient already accepted the
/// current version, `on_accept` fires without the dialog ever showing.
#[component]
pub fn TermsOfUseDialog(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(optional)]
    action_required: bool,
    on_close: Callback<()>,
    #[prop(optional)]
    on_accept: Option<Callback<()>>,
    #[prop(optional)]
    on_decline: Option<Callback<()>>,
) -> impl IntoView {
    let config = use_config();
    let accepted = RwSignal::new(None::<String>);
    let terms = RwSignal::new(None::<TermsOfUse>);
    let error = RwSignal::new(None::<String>);
    let confirm_decline = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let auto_accepted = StoredValue::new(false);

    spawn_local(async move {
        let proms = config.with_value(|c| c.proms.clone());
        match api::fetch_accepted_version(&proms).await {
            Ok(version) => accepted.set(Some(version)),
            Err(e) => {
                log::error!("Terms of Use status: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    });
    spawn_local(async move {
        let proms = config.with_value(|c| c.proms.clone());
        match api::fetch_terms(&proms).await {
            Ok(doc) => terms.set(Some(doc)),
            Err(e) => {
                log::error!("Terms of Use document: {}", e);
                error.set(Some(LOAD_FAILED.to_string()));
            }
        }
    });

    let gate = Memo::new(move |_| {
        let accepted = accepted.get()?;
        terms.with(|t| {
            t.as_ref()
                .map(|t| evaluate_gate(&accepted, t.version.as_deref()))
        })
    });

    Effect::new(move |_| {
        if gate.get() == Some(TermsGate::AlreadyAccepted) && !auto_accepted.get_value() {
            auto_accepted.set_value(true);
            if let Some(on_accept) = on_accept {
                on_accept.run(());
            }
        }
    });

    let accept = move || {
        let Some(version) = terms.with_untracked(|t| t.as_ref().and_then(|t| t.version.clone()))
        else {
            error.set(Some(LOAD_FAILED.to_string()));
            return;
        };
        saving.set(true);
        spawn_local(async move {
            let proms = config.with_value(|c| c.proms.clone());
            let result = api::record_acceptance(&proms, &version).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    confirm_decline.set(false);
                    accepted.set(Some(version));
                    auto_accepted.set_value(true);
                    if let Some(on_accept) = on_accept {
                        on_accept.run(());
                    }
                }
                Err(e) => error.set(Some(acceptance_failure(&e))),
            }
        });
    };

    let loaded = move || error.with(Option::is_some) || gate.with(Option::is_some);
    let visible = move || {
        open.get()
            && loaded()
            && (!action_required || gate.get() != Some(TermsGate::AlreadyAccepted))
    };

    view! {
        <Show when=visible>
            <ModalFrame
                on_close=on_close
                close_on_overlay=!action_required
                modal_class="tou-dialog".to_string()
            >
                <div class="tou-dialog__title">
                    {move || terms.with(|t| t.as_ref().and_then(|t| t.title.clone())).unwrap_or_default()}
                </div>
                {move || {
                    if !action_required {
                        return None;
                    }
                    gate.get().and_then(gate_notice).map(|(title, body)| view! {
                        <div class="tou-dialog__notice">
                            {title.map(|t| view! { <strong>{t}</strong> })}
                            <p>{body}</p>
                        </div>
                    })
                }}
                <div class="tou-dialog__content">
                    {move || match error.get() {
                        Some(message) => view! {
                            <div class="warning-box warning-box--error">
                                <strong>"An error occurred"</strong>
                                <p>{message}</p>
                            </div>
                        }.into_any(),
                        None => {
                            let text = terms.with(|t| t.as_ref().and_then(|t| t.text.clone())).unwrap_or_default();
                            paragraphs(&text).into_iter().map(|p| view! { <p>{p}</p> }).collect_view().into_any()
                        }
                    }}
                </div>
                <div class="tou-dialog__actions">
                    {move || if action_required && error.with(Option::is_none) {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=saving
                                on_click=move |_| accept()
                            >
                                "Accept"
                            </Button>
                            <Button disabled=saving on_click=move |_| confirm_decline.set(true)>
                                "Decline"
                            </Button>
                        }.into_any()
                    } else {
                        view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                                "Close"
                            </Button>
                        }.into_any()
                    }}
                </div>
            </ModalFrame>
        </Show>

        <Show when=move || action_required && confirm_decline.get()>
            <ModalFrame
                on_close=Callback::new(move |_| confirm_decline.set(false))
                close_on_overlay=false
                modal_class="tou-dialog tou-dialog--confirm".to_string()
            >
                <div class="tou-dialog__title">"Action required"</div>
                <div class="tou-dialog__content">{DECLINE_WARNING}</div>
                <div class="tou-dialog__actions">
                    <Button class="tou-dialog__review" on_click=move |_| confirm_decline.set(false)>
                        "Review Terms"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=saving
                        on_click=move |_| accept()
                    >
                        "Accept"
                    </Button>
                    <Button on_click=move |_| {
                        confirm_decline.set(false);
                        if let Some(on_decline) = on_decline {
                            on_decline.run(());
                        }
                    }>
                        "Decline"
                    </Button>
                </div>
            </ModalFrame>
        </Show>
    }
}
