use crate::domain::a001_form::ui::list::state::{self, ENTRY_TYPE};
use crate::shared::api_utils::get_json;
use crate::shared::config::use_config;
use crate::shared::error::AppResult;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::row_actions::{DeleteButton, ExportButton};
use contracts::shared::Row;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

pub fn entry_url(path: &str) -> String {
    format!("{}.deep.json", path.trim_end_matches('/'))
}

pub async fn fetch_entry(path: &str) -> AppResult<Row> {
    get_json(&entry_url(path)).await
}

/// One submitted form with its export and delete actions. Deleting it
/// leaves the page.
#[component]
pub fn FormEntry(#[prop(into)] path: String) -> impl IntoView {
    let config = use_config().with_value(|c| c.forms.clone());
    let entry = RwSignal::new(None::<Row>);
    let error = RwSignal::new(None::<String>);

    let target = path.clone();
    spawn_local(async move {
        match fetch_entry(&target).await {
            Ok(row) => entry.set(Some(row)),
            Err(e) => {
                log::error!("Loading {} failed: {}", target, e);
                error.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <PageFrame page_id="a001_form--detail" category=PAGE_CAT_DETAIL>
            {move || {
                if let Some(e) = error.get() {
                    return view! { <div class="warning-box warning-box--error">{e}</div> }.into_any();
                }
                let Some(row) = entry.get() else {
                    return view! { <Spinner /> }.into_any();
                };
                let fields = state::columns(&config)
                    .into_iter()
                    .map(|col| {
                        let text = col.cell_text(&row);
                        view! {
                            <div class="entry__field">
                                <span class="entry__label">{col.label}</span>
                                <span class="entry__value">{text}</span>
                            </div>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="page__header">
                        <h1 class="page__title">{row.name.clone()}</h1>
                        <div class="page__actions">
                            <ExportButton
                                row=row.clone()
                                entry_name=state::questionnaire_name(&row)
                                entry_type=ENTRY_TYPE
                            />
                            <DeleteButton
                                row=row.clone()
                                entry_type=ENTRY_TYPE
                                should_go_back=true
                                on_complete=Callback::new(|_| ())
                            />
                        </div>
                    </div>
                    <Card class="page__content">{fields}</Card>
                }
                .into_any()
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_url() {
        assert_eq!(entry_url("/Forms/abc"), "/Forms/abc.deep.json");
        assert_eq!(entry_url("/Forms/abc/"), "/Forms/abc.deep.json");
    }
}
