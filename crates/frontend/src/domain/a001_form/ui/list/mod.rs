pub mod state;

use crate::shared::config::use_config;
use crate::shared::list::LiveTable;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::prelude::*;
use thaw::*;

/// Submitted forms, split into completed and draft.
#[component]
pub fn FormView() -> impl IntoView {
    let config = use_config().with_value(|c| c.forms.clone());

    view! {
        <PageFrame page_id="a001_form--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">"Forms"</h1>
            </div>
            <div class="page__content">
                <Card>
                    <LiveTable
                        endpoint=config.endpoint.clone()
                        columns=state::columns(&config)
                        actions=state::actions(&config)
                        tabs=state::TABS.to_vec()
                        default_limit=config.default_limit
                        page_sizes=config.page_sizes.clone()
                        filter_fields=state::FILTER_FIELDS.to_vec()
                    />
                </Card>
            </div>
        </PageFrame>
    }
}
