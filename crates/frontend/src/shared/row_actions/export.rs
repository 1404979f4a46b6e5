//! Export action: builds the positional export path and opens it.

use crate::shared::api_utils::{get_value, open_in_new_tab};
use crate::shared::error::AppError;
use crate::shared::icons::icon;
use crate::shared::list::filter_set::{encode_times, DOUBLE_ENCODE_PASSES};
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a004_questionnaire::{
    find_questions_or_sections, QuestionnaireNode, QuestionnaireNodeKind,
};
use contracts::shared::Row;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    #[default]
    Csv,
    Tsv,
}

impl FileFormat {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Csv => ".csv",
            Self::Tsv => ".tsv",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnMode {
    Include,
    #[default]
    Exclude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    #[default]
    Values,
    Labels,
}

/// Everything the export dialog lets the user choose.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub file_format: FileFormat,
    /// Column headers carry question labels (on by default).
    pub label_headers: bool,
    /// Column headers carry raw identifiers.
    pub identifier_headers: bool,
    pub mode: ColumnMode,
    pub ids: Vec<String>,
    pub data_format: DataFormat,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            file_format: FileFormat::Csv,
            label_headers: true,
            identifier_headers: false,
            mode: ColumnMode::Exclude,
            ids: Vec::new(),
            data_format: DataFormat::Values,
        }
    }
}

impl ExportOptions {
    /// Trimmed; blanks and repeats are ignored.
    pub fn add_id(&mut self, id: &str) {
        let id = id.trim();
        if !id.is_empty() && !self.ids.iter().any(|existing| existing == id) {
            self.ids.push(id.to_string());
        }
    }

    pub fn remove_id(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
    }

    /// The id list is reinterpreted under the new mode, never cleared.
    pub fn set_mode(&mut self, mode: ColumnMode) {
        self.mode = mode;
    }

    /// Export path for `base`. Segment order is positional on the server:
    /// header suppression, identifiers, column filter, label mode, extension.
    /// `None` when there is nothing to export.
    pub fn build_path(&self, base: &str) -> Option<String> {
        if base.is_empty() {
            return None;
        }
        let mut path = base.to_string();
        if !self.label_headers {
            path.push_str(".-csvHeader:labels");
        }
        if self.identifier_headers {
            path.push_str(".csvHeader:raw");
        }
        if !self.ids.is_empty() {
            path.push_str(".questionnaireFilter");
            let prefix = match self.mode {
                ColumnMode::Include => ".questionnaireFilter:include=",
                ColumnMode::Exclude => ".questionnaireFilter:exclude=",
            };
            for id in &self.ids {
                path.push_str(prefix);
                path.push_str(&encode_times(id, DOUBLE_ENCODE_PASSES));
            }
        }
        if self.data_format == DataFormat::Labels {
            path.push_str(".labels");
        }
        path.push_str(self.file_format.suffix());
        Some(path)
    }
}

/// Split discovered entities into (selected, available) for the dialog.
pub fn partition_entities(
    entities: &[QuestionnaireNode],
    ids: &[String],
) -> (Vec<QuestionnaireNode>, Vec<QuestionnaireNode>) {
    entities
        .iter()
        .cloned()
        .partition(|node| ids.iter().any(|id| *id == node.path))
}

pub fn button_text(entry_label: &str, entry_type: &str) -> String {
    if entry_label.is_empty() {
        format!("Export {}", entry_type.to_lowercase()).trim().to_string()
    } else {
        entry_label.to_string()
    }
}

pub fn dialog_title(entry_label: &str, entry_name: &str) -> String {
    if entry_label.is_empty() {
        format!("Export {entry_name}")
    } else {
        format!("Export {entry_label} {entry_name}")
    }
}

fn questionnaire_url(name: &str) -> String {
    format!("/Questionnaires/{}.deep.json", urlencoding::encode(name))
}

#[derive(Debug, Clone, PartialEq)]
enum EntityLoad {
    NotLoaded,
    Loading,
    Loaded(Vec<QuestionnaireNode>),
    Failed(AppError),
}

#[component]
pub fn ExportButton(
    row: Row,
    /// Questionnaire whose questions/sections can be selected as columns.
    #[prop(into)]
    entry_name: String,
    #[prop(optional, into)]
    entry_type: String,
    #[prop(optional, into)]
    entry_label: String,
    /// Pre-fetched questionnaire tree; fetched on first open otherwise.
    #[prop(optional)]
    entity_data: Option<serde_json::Value>,
    #[prop(optional)]
    on_done: Option<Callback<()>>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let options = RwSignal::new(ExportOptions::default());
    let entities = RwSignal::new(match &entity_data {
        Some(json) => EntityLoad::Loaded(find_questions_or_sections(json)),
        None => EntityLoad::NotLoaded,
    });
    let entry_path = StoredValue::new(row.path.clone());
    let entry_name = StoredValue::new(entry_name);
    let text = button_text(&entry_label, &entry_type);
    let title = StoredValue::new(dialog_title(&entry_label, &entry_name.get_value()));

    let file_format = RwSignal::new(".csv".to_string());
    let data_format = RwSignal::new("values".to_string());
    let column_mode = RwSignal::new("exclude".to_string());
    let label_headers = RwSignal::new(true);
    let identifier_headers = RwSignal::new(false);
    let pending_id = RwSignal::new(String::new());

    // Radio/checkbox widgets bind strings and bools; fold them into options.
    Effect::new(move |_| {
        let file = if file_format.get() == ".tsv" { FileFormat::Tsv } else { FileFormat::Csv };
        let data = if data_format.get() == "labels" { DataFormat::Labels } else { DataFormat::Values };
        let mode = if column_mode.get() == "include" { ColumnMode::Include } else { ColumnMode::Exclude };
        let labels = label_headers.get();
        let identifiers = identifier_headers.get();
        options.update(|o| {
            o.file_format = file;
            o.data_format = data;
            o.set_mode(mode);
            o.label_headers = labels;
            o.identifier_headers = identifiers;
        });
    });

    Effect::new(move |_| {
        let id = pending_id.get();
        if !id.is_empty() {
            options.update(|o| o.add_id(&id));
            pending_id.set(String::new());
        }
    });

    let open_dialog = move || {
        open.set(true);
        let should_fetch = entities.with_untracked(|e| *e == EntityLoad::NotLoaded);
        let name = entry_name.get_value();
        if should_fetch && !name.is_empty() {
            entities.set(EntityLoad::Loading);
            spawn_local(async move {
                match get_value(&questionnaire_url(&name)).await {
                    Ok(json) => entities.set(EntityLoad::Loaded(find_questions_or_sections(&json))),
                    Err(e) => {
                        log::warn!("Could not load questionnaire {}: {}", name, e);
                        entities.set(EntityLoad::Failed(e));
                    }
                }
            });
        }
    };

    let close = Callback::new(move |_| open.set(false));

    let export = move |_| {
        match options.with_untracked(|o| o.build_path(&entry_path.get_value())) {
            Some(path) => {
                leptos::logging::log!("Exporting {}", path);
                open_in_new_tab(&path);
            }
            None => log::debug!("Nothing to export"),
        }
        open.set(false);
        if let Some(on_done) = on_done {
            on_done.run(());
        }
    };

    let selected_view = move || {
        let ids = options.with(|o| o.ids.clone());
        entities.with(|state| match state {
            EntityLoad::Loaded(nodes) => {
                let (selected, available) = partition_entities(nodes, &ids);
                view! {
                    <div class="export-dialog__selected">
                        {selected.into_iter().map(|node| {
                            let path = node.path.clone();
                            view! {
                                <div class="export-dialog__entry">
                                    <span class=kind_class(node.kind)>{node.kind.label()}</span>
                                    <span class="export-dialog__entry-name">{node.name.clone()}</span>
                                    <span class="export-dialog__entry-text">{node.text.clone().unwrap_or_default()}</span>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Subtle
                                        attr:title="Delete entry"
                                        on_click=move |_| options.update(|o| o.remove_id(&path))
                                    >
                                        {icon("x")}
                                    </Button>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                    <Select value=pending_id>
                        <option value="">"Select questions/sections from this questionnaire"</option>
                        {available.into_iter().map(|node| view! {
                            <option value=node.path.clone()>
                                {format!("{} {}", node.name, node.text.unwrap_or_default())}
                            </option>
                        }).collect_view()}
                    </Select>
                }.into_any()
            }
            EntityLoad::Loading => view! { <Spinner /> }.into_any(),
            EntityLoad::Failed(e) => view! {
                <div class="export-dialog__error">{e.to_string()}</div>
            }.into_any(),
            EntityLoad::NotLoaded => view! { <></> }.into_any(),
        })
    };

    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Subtle
            attr:title=text
            on_click=move |_| open_dialog()
        >
            {icon("download")}
        </Button>

        <Show when=move || open.get()>
            <ModalFrame on_close=close modal_class="action-dialog export-dialog".to_string()>
                <div class="action-dialog__title">{title.get_value()}</div>
                <div class="action-dialog__content">
                    <div class="export-dialog__row">
                        <span class="export-dialog__label">"File format:"</span>
                        <RadioGroup value=file_format>
                            <Radio value=".csv" label=".csv"/>
                            <Radio value=".tsv" label=".tsv"/>
                        </RadioGroup>
                    </div>
                    <div class="export-dialog__row">
                        <span class="export-dialog__label">"Header format:"</span>
                        <Checkbox checked=label_headers label="Labels"/>
                        <Checkbox checked=identifier_headers label="Identifiers"/>
                    </div>
                    <div class="export-dialog__row">
                        <span class="export-dialog__label">"Data format:"</span>
                        <RadioGroup value=data_format>
                            <Radio value="labels" label="Labels"/>
                            <Radio value="values" label="Values"/>
                        </RadioGroup>
                    </div>
                    <div class="export-dialog__row">
                        <span class="export-dialog__label">"Column selection:"</span>
                        <RadioGroup value=column_mode>
                            <Radio value="include" label="Include"/>
                            <Radio value="exclude" label="Exclude"/>
                        </RadioGroup>
                    </div>
                    {selected_view}
                </div>
                <div class="action-dialog__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=export>
                        "Export"
                    </Button>
                </div>
            </ModalFrame>
        </Show>
    }
}

fn kind_class(kind: QuestionnaireNodeKind) -> &'static str {
    match kind {
        QuestionnaireNodeKind::Question => "entity-avatar entity-avatar--question",
        QuestionnaireNodeKind::Section => "entity-avatar entity-avatar--section",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_order_and_double_encoding() {
        let mut options = ExportOptions {
            file_format: FileFormat::Tsv,
            label_headers: false,
            identifier_headers: true,
            mode: ColumnMode::Include,
            ..ExportOptions::default()
        };
        options.add_id("/a");
        options.add_id("/b");

        let path = options.build_path("/Forms/123").unwrap();
        assert_eq!(
            path,
            "/Forms/123.-csvHeader:labels.csvHeader:raw.questionnaireFilter\
             .questionnaireFilter:include=%252Fa.questionnaireFilter:include=%252Fb.tsv"
        );
        // One decoding pass (done by the browser) yields the single-encoded form.
        assert_eq!(
            urlencoding::decode(&path).unwrap(),
            "/Forms/123.-csvHeader:labels.csvHeader:raw.questionnaireFilter\
             .questionnaireFilter:include=%2Fa.questionnaireFilter:include=%2Fb.tsv"
        );
    }

    #[test]
    fn test_defaults_produce_plain_csv() {
        let options = ExportOptions::default();
        assert_eq!(options.build_path("/Forms/1").as_deref(), Some("/Forms/1.csv"));
    }

    #[test]
    fn test_labels_segment_precedes_extension() {
        let mut options = ExportOptions::default();
        options.data_format = DataFormat::Labels;
        options.add_id("/q");
        assert_eq!(
            options.build_path("/Forms/1").as_deref(),
            Some("/Forms/1.questionnaireFilter.questionnaireFilter:exclude=%252Fq.labels.csv")
        );
    }

    #[test]
    fn test_mode_switch_keeps_ids() {
        let mut options = ExportOptions::default();
        options.add_id("  /a  ");
        options.add_id("");
        options.add_id("/a");
        options.set_mode(ColumnMode::Include);
        assert_eq!(options.ids, vec!["/a".to_string()]);
        assert_eq!(options.mode, ColumnMode::Include);
    }

    #[test]
    fn test_empty_base_is_noop() {
        assert_eq!(ExportOptions::default().build_path(""), None);
    }

    #[test]
    fn test_partition_entities() {
        let node = |path: &str| QuestionnaireNode {
            name: path.trim_start_matches('/').to_string(),
            text: None,
            path: path.to_string(),
            kind: QuestionnaireNodeKind::Question,
        };
        let entities = vec![node("/a"), node("/b"), node("/c")];
        let (selected, available) = partition_entities(&entities, &["/b".to_string()]);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].path, "/b");
        assert_eq!(available.len(), 2);
    }

    #[test]
    fn test_labels() {
        assert_eq!(button_text("", "Form"), "Export form");
        assert_eq!(button_text("Data", "Form"), "Data");
        assert_eq!(dialog_title("", "Visit"), "Export Visit");
        assert_eq!(dialog_title("Data", "Visit"), "Export Data Visit");
    }
}
