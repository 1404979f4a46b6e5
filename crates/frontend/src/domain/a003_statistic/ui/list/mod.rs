use crate::domain::a003_statistic::api;
use crate::shared::config::use_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::domain::a003_statistic::StatisticResult;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const NO_STATISTICS: &str = "No statistics have been added yet.";

/// Every statistic definition visible to the user, computed and shown as
/// raw JSON cards. The first failure replaces the grid with its message.
#[component]
pub fn UserStatistics() -> impl IntoView {
    let config = use_config().with_value(|c| c.statistics.clone());
    let (results, set_results) = signal::<Vec<StatisticResult>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        let definitions = match api::fetch_definitions(&config).await {
            Ok(list) => list,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        if definitions.total == 0 {
            set_error.set(Some(NO_STATISTICS.to_string()));
        }
        for stat in definitions.rows {
            let config = config.clone();
            spawn_local(async move {
                match api::compute(&config, &stat).await {
                    Ok(result) => set_results.update(|r| r.push(result)),
                    Err(e) => {
                        log::warn!("Statistic {} failed: {}", stat.name, e);
                        set_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    });

    view! {
        <PageFrame page_id="a003_statistic--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"Statistics"</h1>
            </div>
            <div class="page__content">
                {move || match error.get() {
                    Some(message) => view! {
                        <Card><p>{message}</p></Card>
                    }.into_any(),
                    None => view! {
                        <div class="statistics-grid">
                            <For
                                each=move || results.get()
                                key=|r| r.path.clone()
                                children=|r| view! {
                                    <Card class="statistic-card">
                                        <p class="statistic-card__body">{r.body.to_string()}</p>
                                    </Card>
                                }
                            />
                        </div>
                    }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
