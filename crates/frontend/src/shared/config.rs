//! Client configuration: repository endpoints, page sizes, vocabulary links.
//!
//! An embedded TOML default is always available; a page may override it by
//! shipping `<meta name="cards-config" content="...toml...">`.

use leptos::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub forms: FormsConfig,
    pub vocabularies: VocabulariesConfig,
    pub proms: PromsConfig,
    pub statistics: StatisticsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    /// Shown when the page has no `<meta name="title">`.
    pub title: String,
    /// Where the user lands when there is no history to go back to.
    pub root_route: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormsConfig {
    pub endpoint: String,
    pub default_limit: usize,
    pub page_sizes: Vec<usize>,
    pub link_prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VocabulariesConfig {
    pub remote_list: String,
    pub local_list: String,
    pub install_base: String,
    pub install_params: Vec<(String, String)>,
    pub uninstall_base: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PromsConfig {
    pub terms_status: String,
    pub terms_document: String,
    pub terms_node: String,
    pub validate_credentials: String,
    pub visit_questionnaire: String,
    pub extension_points: String,
    pub extensions: String,
    pub patient_entry: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StatisticsConfig {
    pub definitions_query: String,
    pub compute: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[app]
title = "CARDS"
root_route = "/"

[forms]
endpoint = "/Forms.paginate?descending=true"
default_limit = 10
page_sizes = [10, 25, 50, 100]
link_prefix = "/content.html"

[vocabularies]
remote_list = "https://data.bioontology.org/ontologies_full?display_context=false&display_links=false&also_include_views=false"
local_list = "/query?query=select%20*%20from%20%5Bcards%3AVocabulary%5D"
install_base = "/Vocabularies?action=install"
install_params = [["vocabularySource", "bioontology"]]
uninstall_base = "/Vocabularies/"

[proms]
terms_status = "/Proms.termsOfUse"
terms_document = "/Proms/TermsOfUse.json"
terms_node = "/Proms/TermsOfUse"
validate_credentials = "/Proms.validateCredentials"
visit_questionnaire = "/Questionnaires/Visit information.deep.json"
extension_points = "/apps/cards/ExtensionPoints/"
extensions = "/uixp/"
patient_entry = "/Proms"

[statistics]
definitions_query = "/query?query=select%20*%20from%20%5Blfs%3AStatistic%5D"
compute = "/Statistics.query"
"#;

static DEFAULT: Lazy<AppConfig> = Lazy::new(|| {
    toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| panic!("embedded config is invalid: {e}"))
});

impl Default for AppConfig {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

/// Parse a TOML override; missing sections are not merged, the override
/// must be complete.
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??;
    element.get_attribute("content")
}

/// Load configuration from the page, falling back to the embedded default.
pub fn load_config() -> AppConfig {
    let mut config = match meta_content("cards-config") {
        Some(contents) => match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loaded config override from page meta");
                config
            }
            Err(e) => {
                log::warn!("Ignoring invalid cards-config meta: {}", e);
                AppConfig::default()
            }
        },
        None => AppConfig::default(),
    };
    if let Some(title) = meta_content("title").filter(|t| !t.trim().is_empty()) {
        config.app.title = title;
    }
    config
}

/// Config provided by `App` at the root of the tree.
pub fn use_config() -> StoredValue<AppConfig> {
    use_context::<StoredValue<AppConfig>>()
        .unwrap_or_else(|| StoredValue::new(AppConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.forms.default_limit, 10);
        assert_eq!(config.app.root_route, "/");
        assert_eq!(
            config.vocabularies.install_params,
            vec![("vocabularySource".to_string(), "bioontology".to_string())]
        );
    }

    #[test]
    fn test_incomplete_override_rejected() {
        assert!(parse_config("[app]\ntitle = \"X\"\n").is_err());
    }
}
