use super::entry::VocabularyEntry;
use crate::domain::a002_vocabulary::api;
use crate::domain::a002_vocabulary::catalog::{matches_filter, DirectoryStatus, VocabularyCatalog};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_vocabulary::VocabularyDescriptor;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const REMOTE_UNAVAILABLE: &str = "The list of Bioportal vocabularies is currently inaccessible.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularySource {
    Local,
    Remote,
}

impl VocabularySource {
    fn title(&self) -> &'static str {
        match self {
            Self::Local => "Installed",
            Self::Remote => "Find on BioPortal",
        }
    }

    fn error_text(&self) -> &'static str {
        match self {
            Self::Local => "The list of installed vocabularies could not be loaded.",
            Self::Remote => REMOTE_UNAVAILABLE,
        }
    }
}

/// Vocabulary administration: installed list plus the BioPortal catalogue.
#[component]
pub fn VocabulariesPage() -> impl IntoView {
    let config = use_config();
    let catalog = RwSignal::new(VocabularyCatalog::default());
    let local_status = RwSignal::new(DirectoryStatus::Init);
    let remote_status = RwSignal::new(DirectoryStatus::Init);
    let filter = RwSignal::new(String::new());

    let load = move |source: VocabularySource| {
        let status = match source {
            VocabularySource::Local => local_status,
            VocabularySource::Remote => remote_status,
        };
        if status.get_untracked() == DirectoryStatus::Loading {
            return;
        }
        status.set(DirectoryStatus::Loading);
        let vocab_config = config.with_value(|c| c.vocabularies.clone());
        spawn_local(async move {
            let result = match source {
                VocabularySource::Local => api::fetch_local(&vocab_config).await,
                VocabularySource::Remote => api::fetch_remote(&vocab_config).await,
            };
            match result {
                Ok(list) => {
                    catalog.update(|c| match source {
                        VocabularySource::Local => c.set_local(list),
                        VocabularySource::Remote => c.set_remote(list),
                    });
                    status.set(DirectoryStatus::Loaded);
                }
                Err(e) => {
                    log::error!("Loading {:?} vocabularies failed: {}", source, e);
                    status.set(DirectoryStatus::Error(e.to_string()));
                }
            }
        });
    };

    load(VocabularySource::Local);
    load(VocabularySource::Remote);

    let reload = Callback::new(move |source: VocabularySource| load(source));
    let api_key = config.with_value(|c| c.vocabularies.api_key.clone());

    view! {
        <PageFrame page_id="a002_vocabulary--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">"Vocabularies"</h1>
                <Input value=filter placeholder="Filter by acronym or name" />
            </div>
            <div class="page__content">
                <VocabularyDirectory
                    source=VocabularySource::Local
                    status=local_status
                    catalog=catalog
                    filter=filter
                    on_retry=reload
                />
                <VocabularyDirectory
                    source=VocabularySource::Remote
                    status=remote_status
                    catalog=catalog
                    filter=filter
                    on_retry=reload
                    api_key=api_key
                />
            </div>
        </PageFrame>
    }
}

#[component]
fn VocabularyDirectory(
    source: VocabularySource,
    status: RwSignal<DirectoryStatus>,
    catalog: RwSignal<VocabularyCatalog>,
    filter: RwSignal<String>,
    on_retry: Callback<VocabularySource>,
    /// Shown in the remote error message when set.
    #[prop(default = None)]
    api_key: Option<String>,
) -> impl IntoView {
    let rows = move || -> Vec<VocabularyDescriptor> {
        let filter = filter.get();
        catalog.with(|c| {
            let list = match source {
                VocabularySource::Local => &c.local,
                VocabularySource::Remote => &c.remote,
            };
            list.iter().filter(|v| matches_filter(v, &filter)).cloned().collect()
        })
    };
    let api_key = StoredValue::new(api_key.filter(|k| !k.is_empty()));

    view! {
        <Card class="vocabulary-directory">
            <h2 class="vocabulary-directory__title">{source.title()}</h2>
            {move || match status.get() {
                DirectoryStatus::Init | DirectoryStatus::Loading => view! {
                    <Spinner label="Loading..." />
                }.into_any(),
                DirectoryStatus::Error(cause) => view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{source.error_text()}</span>
                        {(source == VocabularySource::Remote).then(|| api_key.get_value()).flatten().map(|key| view! {
                            <span class="warning-box__text">
                                {format!("Could not access Bioportal services. The API Key {key} appears to be invalid.")}
                            </span>
                        })}
                        <span class="warning-box__detail" title=cause.clone()>{cause.clone()}</span>
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_retry.run(source)>
                        {icon("refresh")}
                        " Retry"
                    </Button>
                }.into_any(),
                DirectoryStatus::Loaded => view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=100.0>"Identifier"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=240.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Version"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>
                                    {if source == VocabularySource::Local { "Installation Date" } else { "Release Date" }}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=rows
                                key=|v| v.acronym.clone()
                                children=move |vocabulary| view! {
                                    <VocabularyEntry vocabulary=vocabulary catalog=catalog />
                                }
                            />
                        </TableBody>
                    </Table>
                }.into_any(),
            }}
        </Card>
    }
}
