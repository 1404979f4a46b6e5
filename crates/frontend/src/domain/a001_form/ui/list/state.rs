use crate::shared::config::FormsConfig;
use crate::shared::list::{CellFormat, Column, ListTab};
use crate::shared::row_actions::{QuestionnaireOf, RowAction};
use contracts::shared::Row;
use std::sync::Arc;

pub const ENTRY_TYPE: &str = "Form";
pub const CREATED_PATTERN: &str = "YYYY-MM-DD HH:mm";

pub const TABS: [ListTab; 2] = [
    ListTab::new("Completed", ""),
    ListTab::new("Draft", "fieldname=statusFlags&fieldvalue=INCOMPLETE"),
];

pub fn columns(config: &FormsConfig) -> Vec<Column> {
    vec![
        Column::new(
            "@name",
            "Identifier",
            CellFormat::IdentifierLink(config.link_prefix.clone()),
        ),
        Column::new("jcr:created", "Created on", CellFormat::Date(CREATED_PATTERN)),
        Column::text("jcr:createdBy", "Created by"),
    ]
}

/// The questionnaire a form answers; exported columns come from it.
pub fn questionnaire_name(row: &Row) -> String {
    row.text("questionnaire").unwrap_or_else(|| row.name.clone())
}

pub fn actions(config: &FormsConfig) -> Vec<RowAction> {
    let questionnaire_of: QuestionnaireOf = Arc::new(questionnaire_name);
    vec![
        RowAction::Edit {
            href_prefix: config.link_prefix.clone(),
        },
        RowAction::Export {
            entry_type: ENTRY_TYPE,
            questionnaire_of,
        },
        RowAction::Delete {
            entry_type: ENTRY_TYPE,
        },
    ]
}

pub const FILTER_FIELDS: [(&str, &str); 3] = [
    ("jcr:createdBy", "Created by"),
    ("jcr:created", "Created on"),
    ("questionnaire", "Questionnaire"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_draft_tab_fragment() {
        assert_eq!(TABS[0].fragment, "");
        assert_eq!(TABS[1].fragment, "fieldname=statusFlags&fieldvalue=INCOMPLETE");
    }

    #[test]
    fn test_actions_link_to_entry_page() {
        let config = crate::shared::config::AppConfig::default().forms;
        let actions = actions(&config);
        assert_eq!(actions.len(), 3);
        match &actions[0] {
            RowAction::Edit { href_prefix } => assert_eq!(href_prefix, "/content.html"),
            _ => panic!("first action should be Edit"),
        }
    }

    #[test]
    fn test_questionnaire_name() {
        let row = Row::new("/Forms/1", "1")
            .with_field("questionnaire", json!({"@name": "Visit information"}));
        assert_eq!(questionnaire_name(&row), "Visit information");
        assert_eq!(questionnaire_name(&Row::new("/Forms/2", "2")), "2");
    }
}
