use crate::shared::date_utils::format_with_pattern;
use contracts::shared::Row;
use std::sync::Arc;

/// How a cell value is rendered.
#[derive(Clone)]
pub enum CellFormat {
    String,
    /// Moment-style pattern, e.g. "YYYY-MM-DD HH:mm".
    Date(&'static str),
    /// Cell text links to `<prefix><row path>`.
    IdentifierLink(String),
    Custom(Arc<dyn Fn(&Row) -> String + Send + Sync>),
}

impl std::fmt::Debug for CellFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "String"),
            Self::Date(p) => write!(f, "Date({p})"),
            Self::IdentifierLink(prefix) => write!(f, "IdentifierLink({prefix})"),
            Self::Custom(_) => write!(f, "Custom"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub format: CellFormat,
}

impl Column {
    pub fn new(key: &'static str, label: &'static str, format: CellFormat) -> Self {
        Self { key, label, format }
    }

    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, CellFormat::String)
    }

    /// Rendered cell text; missing values render empty.
    pub fn cell_text(&self, row: &Row) -> String {
        match &self.format {
            CellFormat::Custom(render) => render(row),
            CellFormat::Date(pattern) => row
                .text(self.key)
                .map(|v| format_with_pattern(&v, pattern))
                .unwrap_or_default(),
            CellFormat::String | CellFormat::IdentifierLink(_) => {
                row.text(self.key).unwrap_or_default()
            }
        }
    }

    pub fn cell_href(&self, row: &Row) -> Option<String> {
        match &self.format {
            CellFormat::IdentifierLink(prefix) => Some(format!("{}{}", prefix, row.path)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> Row {
        Row::new("/Forms/123", "123")
            .with_field("jcr:created", json!("2024-03-15T14:02:26.123-05:00"))
            .with_field("jcr:createdBy", json!("admin"))
    }

    #[test]
    fn test_string_and_date_cells() {
        assert_eq!(Column::text("jcr:createdBy", "Created by").cell_text(&row()), "admin");
        let created = Column::new("jcr:created", "Created on", CellFormat::Date("YYYY-MM-DD HH:mm"));
        assert_eq!(created.cell_text(&row()), "2024-03-15 14:02");
        assert_eq!(Column::text("missing", "Missing").cell_text(&row()), "");
    }

    #[test]
    fn test_identifier_link() {
        let col = Column::new(
            "@name",
            "Identifier",
            CellFormat::IdentifierLink("/content.html".into()),
        );
        assert_eq!(col.cell_text(&row()), "123");
        assert_eq!(col.cell_href(&row()).as_deref(), Some("/content.html/Forms/123"));
        assert_eq!(Column::text("@name", "Name").cell_href(&row()), None);
    }

    #[test]
    fn test_custom_cell() {
        let col = Column::new(
            "@path",
            "Upper",
            CellFormat::Custom(Arc::new(|r: &Row| r.name.to_uppercase())),
        );
        let r = Row::new("/Forms/x", "abc");
        assert_eq!(col.cell_text(&r), "ABC");
    }
}
