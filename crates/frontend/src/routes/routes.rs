//! Pathname-based routing. The pathname is the single source of truth; the
//! current route lives in `AppGlobalContext::route`.

use crate::dashboards::d400_proms::ui::dashboard::PromsDashboard;
use crate::domain::a001_form::ui::details::FormEntry;
use crate::domain::a001_form::ui::list::FormView;
use crate::domain::a002_vocabulary::ui::directory::VocabulariesPage;
use crate::domain::a003_statistic::ui::list::UserStatistics;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::usecases::u501_patient_identification::view::PatientIdentificationPage;
use crate::usecases::u502_terms_of_use::configuration::TermsConfiguration;
use crate::usecases::u503_proms_landing::view::PromsLandingPage;
use leptos::prelude::*;

const DASHBOARD_PREFIX: &str = "/Dashboard/";
/// Matches the default `forms.link_prefix`.
const ENTRY_PREFIX: &str = "/content.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Forms,
    Vocabularies,
    Statistics,
    TermsConfiguration,
    PromsLanding,
    PatientIdentification,
    /// Dashboard named by everything after `/Dashboard/`.
    Dashboard(String),
    /// Single repository entry, by path (e.g. `/Forms/abc`).
    Entry(String),
    NotFound(String),
}

impl AppRoute {
    pub fn from_path(pathname: &str) -> Self {
        if let Some(name) = pathname.strip_prefix(DASHBOARD_PREFIX) {
            let name = urlencoding::decode(name)
                .map(|n| n.into_owned())
                .unwrap_or_else(|_| name.to_string());
            return Self::Dashboard(name.trim_end_matches('/').to_string());
        }
        if let Some(path) = pathname.strip_prefix(ENTRY_PREFIX) {
            let path = path.trim_end_matches('/');
            if path.starts_with('/') {
                return Self::Entry(path.to_string());
            }
        }
        match pathname.trim_end_matches('/') {
            "" | "/Forms" => Self::Forms,
            "/Vocabularies" => Self::Vocabularies,
            "/Statistics" => Self::Statistics,
            "/admin/TermsOfUse" => Self::TermsConfiguration,
            "/Welcome" => Self::PromsLanding,
            "/Proms" => Self::PatientIdentification,
            other => Self::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Forms => "/Forms".into(),
            Self::Vocabularies => "/Vocabularies".into(),
            Self::Statistics => "/Statistics".into(),
            Self::TermsConfiguration => "/admin/TermsOfUse".into(),
            Self::PromsLanding => "/Welcome".into(),
            Self::PatientIdentification => "/Proms".into(),
            Self::Dashboard(name) => format!("{DASHBOARD_PREFIX}{}", urlencoding::encode(name)),
            Self::Entry(path) => format!("{ENTRY_PREFIX}{path}"),
            Self::NotFound(path) => path.clone(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Forms => "Forms".into(),
            Self::Vocabularies => "Vocabularies".into(),
            Self::Statistics => "Statistics".into(),
            Self::TermsConfiguration => "Terms of Use".into(),
            Self::PromsLanding => "Welcome".into(),
            Self::PatientIdentification => "Patient identification".into(),
            Self::Dashboard(name) => name.clone(),
            Self::Entry(path) => path.rsplit('/').next().unwrap_or_default().to_string(),
            Self::NotFound(_) => "Not found".into(),
        }
    }

    /// Patient-facing routes are rendered without the admin chrome.
    pub fn is_patient_facing(&self) -> bool {
        matches!(self, Self::PromsLanding | Self::PatientIdentification)
    }
}

fn render_route(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Forms => view! { <FormView /> }.into_any(),
        AppRoute::Vocabularies => view! { <VocabulariesPage /> }.into_any(),
        AppRoute::Statistics => view! { <UserStatistics /> }.into_any(),
        AppRoute::TermsConfiguration => view! { <TermsConfiguration /> }.into_any(),
        AppRoute::PromsLanding => view! { <PromsLandingPage /> }.into_any(),
        AppRoute::PatientIdentification => view! { <PatientIdentificationPage /> }.into_any(),
        AppRoute::Dashboard(name) => view! { <PromsDashboard name=name /> }.into_any(),
        AppRoute::Entry(path) => view! { <FormEntry path=path /> }.into_any(),
        AppRoute::NotFound(path) => view! {
            <div class="page page--not-found">
                <h2>"Page not found"</h2>
                <p>{path}</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    ctx.init_router_integration();

    // Only a switch between patient and admin pages rebuilds the shell.
    let patient_facing = Memo::new(move |_| ctx.route.with(AppRoute::is_patient_facing));

    view! {
        {move || {
            if patient_facing.get() {
                view! { {move || render_route(ctx.route.get())} }.into_any()
            } else {
                view! {
                    <Shell
                        left=|| view! { <Sidebar /> }.into_any()
                        center=move || render_route(ctx.route.get())
                    />
                }
                .into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Forms);
        assert_eq!(AppRoute::from_path("/Vocabularies/"), AppRoute::Vocabularies);
        assert_eq!(AppRoute::from_path("/Proms"), AppRoute::PatientIdentification);
        assert_eq!(
            AppRoute::from_path("/nope"),
            AppRoute::NotFound("/nope".to_string())
        );
    }

    #[test]
    fn test_dashboard_name_after_prefix() {
        assert_eq!(
            AppRoute::from_path("/Dashboard/Cardiac%20Rehab"),
            AppRoute::Dashboard("Cardiac Rehab".to_string())
        );
        let route = AppRoute::Dashboard("Cardiac Rehab".into());
        assert_eq!(AppRoute::from_path(&route.path()), route);
    }

    #[test]
    fn test_entry_route() {
        let route = AppRoute::from_path("/content.html/Forms/abc");
        assert_eq!(route, AppRoute::Entry("/Forms/abc".to_string()));
        assert_eq!(route.path(), "/content.html/Forms/abc");
        assert_eq!(route.title(), "abc");
        assert_eq!(
            AppRoute::from_path("/content.html"),
            AppRoute::NotFound("/content.html".to_string())
        );
    }
}
