//! Delete action: confirm, POST `:operation=delete`, report conflicts.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::post_form;
use crate::shared::error::{AppError, AppResult};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::shared::Row;
use leptos::prelude::*;
use serde::Serialize;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// The repository answers 500 when referential integrity blocks a delete.
pub const CONFLICT_STATUS: u16 = 500;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeleteDialogState {
    #[default]
    Closed,
    ConfirmOpen,
    Deleting,
    ErrorOpen(String),
}

impl DeleteDialogState {
    pub fn open(&mut self) {
        if *self == Self::Closed {
            *self = Self::ConfirmOpen;
        }
    }

    /// Dismiss the confirmation or the error. Ignored while a request is
    /// in flight.
    pub fn close(&mut self) {
        if *self != Self::Deleting {
            *self = Self::Closed;
        }
    }

    /// Returns `true` when a request should be sent. A second click while
    /// deleting returns `false`.
    pub fn submit(&mut self) -> bool {
        if *self == Self::ConfirmOpen {
            *self = Self::Deleting;
            true
        } else {
            false
        }
    }

    /// Returns `true` exactly when the caller should refresh.
    pub fn finish(&mut self, outcome: AppResult<()>) -> bool {
        if *self != Self::Deleting {
            return false;
        }
        match outcome {
            Ok(()) => {
                *self = Self::Closed;
                true
            }
            Err(e) => {
                *self = Self::ErrorOpen(e.to_string());
                false
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        *self == Self::Deleting
    }
}

/// Every status other than the conflict status counts as success.
pub fn classify_delete_status(status: u16, name: &str, entry_type: &str) -> AppResult<()> {
    if status == CONFLICT_STATUS {
        Err(AppError::conflict(name, entry_type))
    } else {
        Ok(())
    }
}

#[derive(Serialize)]
struct DeleteOperation {
    #[serde(rename = ":operation")]
    operation: &'static str,
}

pub async fn delete_entry(path: &str, name: &str, entry_type: &str) -> AppResult<()> {
    let response = post_form(
        path,
        &DeleteOperation {
            operation: "delete",
        },
    )
    .await?;
    classify_delete_status(response.status(), name, entry_type)
}

#[component]
pub fn DeleteButton(
    row: Row,
    /// Human name of the kind of entry, e.g. "Form".
    #[prop(into)]
    entry_type: String,
    /// Navigate away after a successful delete (used by detail pages).
    #[prop(optional)]
    should_go_back: bool,
    on_complete: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(DeleteDialogState::Closed);
    let name = StoredValue::new(row.name.clone());
    let path = StoredValue::new(row.path.clone());
    let entry_type = StoredValue::new(entry_type);
    let global = use_context::<AppGlobalContext>();

    let confirm = move |_| {
        if !state.try_update(|s| s.submit()).unwrap_or(false) {
            return;
        }
        // The row may be unmounted while the request is in flight.
        let target = path.get_value();
        let entry_name = name.get_value();
        let kind = entry_type.get_value();
        leptos::logging::log!("Deleting {}", target);
        spawn_local(async move {
            let outcome = delete_entry(&target, &entry_name, &kind).await;
            if let Err(e) = &outcome {
                log::warn!("Delete of {} failed: {}", target, e);
            }
            let refresh = state.try_update(|s| s.finish(outcome)).unwrap_or(false);
            if refresh {
                on_complete.run(());
                if should_go_back {
                    if let Some(global) = global {
                        global.go_back_or_root();
                    }
                }
            }
        });
    };

    let close = Callback::new(move |_| state.update(|s| s.close()));

    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Subtle
            attr:title=format!("Delete {}", entry_type.get_value().to_lowercase())
            on_click=move |_| state.update(|s| s.open())
        >
            {icon("delete")}
        </Button>

        {move || match state.get() {
            DeleteDialogState::Closed => None,
            DeleteDialogState::ErrorOpen(message) => Some(view! {
                <ModalFrame on_close=close modal_class="action-dialog".to_string()>
                    <div class="action-dialog__title">"Error"</div>
                    <div class="action-dialog__content">{message}</div>
                    <div class="action-dialog__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| close.run(())>
                            "Close"
                        </Button>
                    </div>
                </ModalFrame>
            }.into_any()),
            open => {
                let busy = open.is_busy();
                Some(view! {
                    <ModalFrame on_close=close modal_class="action-dialog".to_string()>
                        <div class="action-dialog__title">
                            {format!("Delete {}", name.get_value())}
                        </div>
                        <div class="action-dialog__content">
                            {format!("Are you sure you want to delete {}?", name.get_value())}
                        </div>
                        <div class="action-dialog__actions">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=busy
                                on_click=move |_| close.run(())
                            >
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=busy
                                on_click=confirm
                            >
                                {if busy { "Deleting..." } else { "Delete" }}
                            </Button>
                        </div>
                    </ModalFrame>
                }.into_any())
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_status_opens_error() {
        let mut state = DeleteDialogState::Closed;
        state.open();
        assert!(state.submit());
        let refresh = state.finish(classify_delete_status(500, "Visit 12", "Form"));
        assert!(!refresh);
        assert_eq!(
            state,
            DeleteDialogState::ErrorOpen(
                "Visit 12 could not be removed. This can occur if completed forms reference this form."
                    .into()
            )
        );
    }

    #[test]
    fn test_success_refreshes_exactly_once() {
        let mut state = DeleteDialogState::Closed;
        state.open();
        assert!(state.submit());
        assert!(state.finish(classify_delete_status(200, "x", "Form")));
        assert_eq!(state, DeleteDialogState::Closed);
        assert!(!state.finish(Ok(())));
    }

    #[test]
    fn test_non_conflict_errors_count_as_success() {
        assert!(classify_delete_status(404, "x", "Form").is_ok());
        assert!(classify_delete_status(204, "x", "Form").is_ok());
    }

    #[test]
    fn test_no_duplicate_submission() {
        let mut state = DeleteDialogState::Closed;
        assert!(!state.submit());
        state.open();
        assert!(state.submit());
        assert!(!state.submit());
        state.close();
        assert!(state.is_busy());
    }

    #[test]
    fn test_network_failure_shows_message() {
        let mut state = DeleteDialogState::ConfirmOpen;
        state.submit();
        state.finish(Err(AppError::Network("offline".into())));
        assert_eq!(state, DeleteDialogState::ErrorOpen("Network error: offline".into()));
        state.close();
        assert_eq!(state, DeleteDialogState::Closed);
    }
}
