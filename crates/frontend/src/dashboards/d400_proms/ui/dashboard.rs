use crate::dashboards::d400_proms::api;
use crate::domain::a001_form::ui::list::state as form_list;
use crate::shared::config::{use_config, FormsConfig};
use crate::shared::list::{append_query, LiveTable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_proms::{DashboardExtension, ExtensionPoint};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

pub const PALETTE: [&str; 8] = [
    "#003366", "#f94900", "#ff9900", "#36b37e", "#00b8d9", "#3c78d8", "#974efd", "#9e4973",
];

pub fn widget_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Forms answering one questionnaire.
pub fn widget_endpoint(forms: &FormsConfig, questionnaire_uuid: &str) -> String {
    append_query(
        &forms.endpoint,
        &format!(
            "fieldname=questionnaire&fieldvalue={}",
            urlencoding::encode(questionnaire_uuid)
        ),
    )
}

/// Clinic dashboard assembled from the widgets registered under
/// `DashboardViews<name>`.
#[component]
pub fn PromsDashboard(#[prop(into)] name: String) -> impl IntoView {
    let config = use_config();
    let name = StoredValue::new(name);
    let point = RwSignal::new(ExtensionPoint::default());
    let extensions = RwSignal::new(None::<Vec<DashboardExtension>>);
    let visit_loaded = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        let proms = config.with_value(|c| c.proms.clone());
        match api::fetch_visit_information(&proms).await {
            Ok(_) => visit_loaded.set(true),
            Err(e) => {
                log::error!("Visit information: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    });
    spawn_local(async move {
        let proms = config.with_value(|c| c.proms.clone());
        let dashboard = name.get_value();
        if dashboard.is_empty() {
            extensions.set(Some(Vec::new()));
            return;
        }
        match api::fetch_extension_point(&proms, &dashboard).await {
            Ok(p) => point.set(p),
            Err(e) => log::warn!("Extension point {}: {}", dashboard, e),
        }
    });
    spawn_local(async move {
        let proms = config.with_value(|c| c.proms.clone());
        let dashboard = name.get_value();
        if dashboard.is_empty() {
            return;
        }
        match api::fetch_extensions(&proms, &dashboard).await {
            Ok(list) => extensions.set(Some(list)),
            Err(e) => {
                log::error!("Something went wrong loading the proms dashboard: {}", e);
                extensions.set(Some(Vec::new()));
            }
        }
    });

    let ready = move || visit_loaded.get() && extensions.with(Option::is_some);
    let title = move || point.with(|p| name.with_value(|n| p.display_title(n)));

    view! {
        <PageFrame page_id="d400_proms--dashboard" category=PAGE_CAT_DASHBOARD>
            {move || {
                if let Some(e) = error.get() {
                    return view! { <div class="warning-box warning-box--error">{e}</div> }.into_any();
                }
                if !ready() {
                    return view! {
                        <div class="dashboard__loading"><Spinner /></div>
                    }.into_any();
                }
                let forms = config.with_value(|c| c.forms.clone());
                let widgets = extensions.get().unwrap_or_default();
                view! {
                    <h1 class="dashboard__title">{title}</h1>
                    {move || point.with(|p| p.description.clone())
                        .filter(|d| !d.is_empty())
                        .map(|d| view! { <div class="dashboard__description">{d}</div> })}
                    <div class="dashboard__grid">
                        {widgets.into_iter().enumerate().map(|(index, ext)| view! {
                            <PromsWidget extension=ext color=widget_color(index) forms=forms.clone() />
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </PageFrame>
    }
}

#[component]
fn PromsWidget(
    extension: DashboardExtension,
    color: &'static str,
    forms: FormsConfig,
) -> impl IntoView {
    let title = extension.title();
    let body = match extension.questionnaire_uuid() {
        Some(uuid) => view! {
            <LiveTable
                endpoint=widget_endpoint(&forms, uuid)
                columns=form_list::columns(&forms)
                actions=form_list::actions(&forms)
                default_limit=forms.default_limit
                page_sizes=forms.page_sizes.clone()
            />
        }
        .into_any(),
        None => view! { <p class="dashboard__empty">"No questionnaire configured"</p> }.into_any(),
    };

    view! {
        <Card class="dashboard__widget">
            <div class="dashboard__widget-title" style=format!("border-left: 4px solid {color}; color: {color};")>
                {title}
            </div>
            {body}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(widget_color(0), "#003366");
        assert_eq!(widget_color(7), "#9e4973");
        assert_eq!(widget_color(8), "#003366");
        assert_eq!(widget_color(10), "#ff9900");
    }

    #[test]
    fn test_widget_endpoint() {
        let forms = AppConfig::default().forms;
        assert_eq!(
            widget_endpoint(&forms, "abc-1"),
            "/Forms.paginate?descending=true&fieldname=questionnaire&fieldvalue=abc-1"
        );
    }
}
