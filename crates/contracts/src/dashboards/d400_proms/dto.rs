use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Definition node of a dashboard extension point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtensionPoint {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "cards:extensionPointName", default)]
    pub extension_point_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Identifier of the survey set the dashboard is scoped to.
    #[serde(default)]
    pub surveys: Option<String>,
}

impl ExtensionPoint {
    /// `title`, then the extension point name, then the URL segment.
    pub fn display_title(&self, fallback: &str) -> String {
        self.title
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| self.extension_point_name.clone().filter(|t| !t.is_empty()))
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// One widget registered under a dashboard extension point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardExtension {
    #[serde(rename = "@path", default)]
    pub path: String,
    #[serde(rename = "cards:extensionName", default)]
    pub name: String,
    #[serde(rename = "cards:defaultOrder", default)]
    pub default_order: i64,
    /// Usually the questionnaire the widget lists forms for.
    #[serde(rename = "cards:data", default)]
    pub data: Value,
}

impl DashboardExtension {
    pub fn questionnaire_uuid(&self) -> Option<&str> {
        self.data.get("jcr:uuid").and_then(Value::as_str)
    }

    pub fn title(&self) -> String {
        self.data
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_title_fallbacks() {
        let point = ExtensionPoint {
            title: None,
            extension_point_name: Some("Clinic A".into()),
            ..Default::default()
        };
        assert_eq!(point.display_title("ClinicA"), "Clinic A");
        assert_eq!(ExtensionPoint::default().display_title("ClinicA"), "ClinicA");
    }

    #[test]
    fn test_extension_fields() {
        let ext: DashboardExtension = serde_json::from_value(json!({
            "cards:extensionName": "Surveys",
            "cards:defaultOrder": 2,
            "cards:data": {"jcr:uuid": "abc", "title": "EQ5D"}
        }))
        .unwrap();
        assert_eq!(ext.default_order, 2);
        assert_eq!(ext.questionnaire_uuid(), Some("abc"));
        assert_eq!(ext.title(), "EQ5D");
    }
}
