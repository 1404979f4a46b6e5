use crate::shared::api_utils::{get_json, get_value};
use crate::shared::config::PromsConfig;
use crate::shared::error::AppResult;
use contracts::dashboards::d400_proms::{DashboardExtension, ExtensionPoint};
use serde_json::Value;

const EXTENSION_POINT_PREFIX: &str = "DashboardViews";

pub fn extension_point_id(name: &str) -> String {
    format!("{EXTENSION_POINT_PREFIX}{}", urlencoding::encode(name))
}

pub fn extension_point_url(config: &PromsConfig, name: &str) -> String {
    format!("{}{}.json", config.extension_points, extension_point_id(name))
}

pub fn extensions_url(config: &PromsConfig, name: &str) -> String {
    format!("{}{}.json", config.extensions, extension_point_id(name))
}

pub async fn fetch_visit_information(config: &PromsConfig) -> AppResult<Value> {
    get_value(&config.visit_questionnaire).await
}

pub async fn fetch_extension_point(config: &PromsConfig, name: &str) -> AppResult<ExtensionPoint> {
    get_json(&extension_point_url(config, name)).await
}

/// Widgets registered for the dashboard, in display order.
pub async fn fetch_extensions(config: &PromsConfig, name: &str) -> AppResult<Vec<DashboardExtension>> {
    let mut extensions: Vec<DashboardExtension> = get_json(&extensions_url(config, name)).await?;
    sort_extensions(&mut extensions);
    Ok(extensions)
}

/// Stable sort on `cards:defaultOrder`.
pub fn sort_extensions(extensions: &mut [DashboardExtension]) {
    extensions.sort_by_key(|e| e.default_order);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    fn ext(name: &str, order: i64) -> DashboardExtension {
        DashboardExtension {
            path: String::new(),
            name: name.into(),
            default_order: order,
            data: Value::Null,
        }
    }

    #[test]
    fn test_urls() {
        let config = AppConfig::default().proms;
        assert_eq!(
            extension_point_url(&config, "ClinicA"),
            "/apps/cards/ExtensionPoints/DashboardViewsClinicA.json"
        );
        assert_eq!(extensions_url(&config, "Clinic A"), "/uixp/DashboardViewsClinic%20A.json");
    }

    #[test]
    fn test_sort_is_stable() {
        let mut list = vec![ext("c", 3), ext("a", 1), ext("b", 1)];
        sort_extensions(&mut list);
        let names: Vec<_> = list.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
