//! Per-row actions offered by list views.

pub mod delete;
pub mod export;

pub use delete::DeleteButton;
pub use export::ExportButton;

use crate::shared::icons::icon;
use contracts::shared::Row;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Picks the questionnaire an export of this row draws its columns from.
pub type QuestionnaireOf = Arc<dyn Fn(&Row) -> String + Send + Sync>;

#[derive(Clone)]
pub enum RowAction {
    Delete {
        entry_type: &'static str,
    },
    Export {
        entry_type: &'static str,
        questionnaire_of: QuestionnaireOf,
    },
    /// Navigates to `<prefix><row path>`.
    Edit {
        href_prefix: String,
    },
}

impl RowAction {
    /// Render the action for one row; `on_done` fires after a mutation so
    /// the list can refresh.
    pub fn render(&self, row: &Row, on_done: Callback<()>) -> AnyView {
        match self {
            Self::Delete { entry_type } => view! {
                <DeleteButton row=row.clone() entry_type=*entry_type on_complete=on_done />
            }
            .into_any(),
            Self::Export {
                entry_type,
                questionnaire_of,
            } => view! {
                <ExportButton
                    row=row.clone()
                    entry_name=questionnaire_of(row)
                    entry_type=*entry_type
                />
            }
            .into_any(),
            Self::Edit { href_prefix } => {
                let href = edit_href(href_prefix, row);
                view! {
                    <a href=href class="row-action" title="Edit">
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle>
                            {icon("edit")}
                        </Button>
                    </a>
                }
                .into_any()
            }
        }
    }
}

pub fn edit_href(prefix: &str, row: &Row) -> String {
    format!("{}{}?edit=true", prefix, row.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_href() {
        let row = Row::new("/Forms/42", "42");
        assert_eq!(edit_href("/content.html", &row), "/content.html/Forms/42?edit=true");
    }
}
