use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a repository collection (a submitted form, a vocabulary, ...).
///
/// `path` is both the row key and the target of every action request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "@path")]
    pub path: String,

    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Row {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Raw value of a field, including the `@path` / `@name` identity fields.
    pub fn value(&self, key: &str) -> Option<Value> {
        match key {
            "@path" => Some(Value::String(self.path.clone())),
            "@name" => Some(Value::String(self.name.clone())),
            _ => self.fields.get(key).cloned(),
        }
    }

    /// Field rendered as plain text; nested objects fall back to their
    /// `@name`, then to their JSON form.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.value(key)? {
            Value::Null => None,
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Object(obj) => Some(
                obj.get("@name")
                    .and_then(|n| n.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| Value::Object(obj.clone()).to_string()),
            ),
            other => Some(other.to_string()),
        }
    }
}

/// Body of a paginated collection query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
    #[serde(default, alias = "totalrows")]
    pub total: usize,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub limit: usize,
}

/// A window onto a logical collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            offset: 0,
            limit: 0,
        }
    }
}

impl<T> Page<T> {
    /// Builds a page from a response, keeping the offset/limit that were
    /// requested when the server does not echo them back.
    pub fn from_response(response: ListResponse<T>, offset: usize, limit: usize) -> Self {
        Self {
            rows: response.rows,
            total: response.total,
            offset: if response.offset == 0 { offset } else { response.offset },
            limit: if response.limit == 0 { limit } else { response.limit },
        }
    }

    /// `offset + rows <= total`. A page that fails this was produced while
    /// the collection was being mutated and will be replaced by the next fetch.
    pub fn is_consistent(&self) -> bool {
        self.offset + self.rows.len() <= self.total
    }

    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }

    pub fn current_page(&self) -> usize {
        if self.limit == 0 {
            0
        } else {
            self.offset / self.limit
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_identity_and_fields() {
        let row: Row = serde_json::from_value(json!({
            "@path": "/Forms/123",
            "@name": "123",
            "jcr:createdBy": "admin",
            "questionnaire": {"@name": "Visit information", "@path": "/Questionnaires/Visit information"}
        }))
        .unwrap();

        assert_eq!(row.path, "/Forms/123");
        assert_eq!(row.text("@name").as_deref(), Some("123"));
        assert_eq!(row.text("jcr:createdBy").as_deref(), Some("admin"));
        assert_eq!(row.text("questionnaire").as_deref(), Some("Visit information"));
        assert_eq!(row.text("missing"), None);
    }

    #[test]
    fn test_list_response_accepts_totalrows() {
        let resp: ListResponse<Row> = serde_json::from_value(json!({
            "rows": [{"@path": "/Forms/1", "@name": "1"}],
            "totalrows": 42,
            "offset": 10,
            "limit": 10
        }))
        .unwrap();
        assert_eq!(resp.total, 42);

        let page = Page::from_response(resp, 0, 25);
        assert_eq!(page.offset, 10);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total_pages(), 5);
        assert_eq!(page.current_page(), 1);
        assert!(page.is_consistent());
    }

    #[test]
    fn test_page_falls_back_to_requested_window() {
        let resp: ListResponse<Row> =
            serde_json::from_value(json!({"rows": [], "total": 0})).unwrap();
        let page = Page::from_response(resp, 20, 10);
        assert_eq!(page.offset, 20);
        assert_eq!(page.limit, 10);
        assert!(page.is_empty());
    }

    #[test]
    fn test_stale_page_is_inconsistent() {
        let page = Page {
            rows: vec![Row::new("/Forms/1", "1"), Row::new("/Forms/2", "2")],
            total: 11,
            offset: 10,
            limit: 10,
        };
        assert!(!page.is_consistent());
    }
}
