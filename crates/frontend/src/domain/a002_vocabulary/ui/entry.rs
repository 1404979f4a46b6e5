use super::action::VocabularyAction;
use crate::domain::a002_vocabulary::api;
use crate::domain::a002_vocabulary::catalog::{OperationFailure, VocabularyCatalog, VocabularyOp};
use crate::shared::config::{use_config, AppConfig};
use crate::shared::date_utils::format_with_pattern;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a002_vocabulary::VocabularyDescriptor;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const DATE_PATTERN: &str = "MMM DD YYYY";

/// Start an install/uninstall and settle it into the catalog.
fn run_operation(
    config: StoredValue<AppConfig>,
    catalog: RwSignal<VocabularyCatalog>,
    failure: RwSignal<Option<OperationFailure>>,
    vocabulary: VocabularyDescriptor,
    op: VocabularyOp,
) {
    let acronym = vocabulary.acronym.clone();
    let Some(old) = catalog.try_update(|c| c.begin(&acronym, op)).flatten() else {
        log::debug!("{} of {} ignored in current phase", op.label(), acronym);
        return;
    };
    let config = config.with_value(|c| c.vocabularies.clone());
    leptos::logging::log!("{} {}", op.label(), acronym);
    spawn_local(async move {
        let result = match op {
            VocabularyOp::Install => api::install(&config, &acronym).await,
            VocabularyOp::Uninstall => api::uninstall(&config, &acronym).await,
        };
        if let Err(e) = &result {
            log::warn!("{} of {} failed: {}", op.label(), acronym, e);
        }
        let outcome = catalog
            .try_update(|c| c.finish(&vocabulary, op, old, result))
            .flatten();
        failure.set(outcome);
    });
}

#[component]
pub fn VocabularyEntry(vocabulary: VocabularyDescriptor, catalog: RwSignal<VocabularyCatalog>) -> impl IntoView {
    let config = use_config();
    let failure = RwSignal::new(None::<OperationFailure>);
    let details_open = RwSignal::new(false);
    let acronym = vocabulary.acronym.clone();
    let phase = Signal::derive(move || catalog.with(|c| c.phase(&acronym)));
    let date = vocabulary
        .display_date()
        .map(|d| format_with_pattern(d, DATE_PATTERN))
        .unwrap_or_default();
    let description = vocabulary.description.clone();
    let acronym_cell = vocabulary.acronym.clone();
    let name_cell = vocabulary.name.clone();
    let version_cell = vocabulary.version.clone().unwrap_or_default();
    let action_acronym = vocabulary.acronym.clone();
    let action_name = vocabulary.name.clone();
    let stored = StoredValue::new(vocabulary);

    let on_install = Callback::new(move |_| {
        run_operation(config, catalog, failure, stored.get_value(), VocabularyOp::Install)
    });
    let on_uninstall = Callback::new(move |_| {
        run_operation(config, catalog, failure, stored.get_value(), VocabularyOp::Uninstall)
    });

    view! {
        <TableRow>
            <TableCell><TableCellLayout>{acronym_cell}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{name_cell}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{version_cell}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout>
                    <VocabularyAction
                        phase=phase
                        acronym=action_acronym
                        name=action_name
                        on_install=on_install
                        on_uninstall=on_uninstall
                    />
                    {description.is_some().then(|| view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            attr:title="About"
                            on_click=move |_| details_open.set(true)
                        >
                            {icon("info")}
                        </Button>
                    })}
                </TableCellLayout>
            </TableCell>
        </TableRow>

        <Show when=move || details_open.get()>
            <ModalFrame on_close=Callback::new(move |_| details_open.set(false)) modal_class="action-dialog".to_string()>
                <div class="action-dialog__title">{stored.with_value(|v| v.acronym.clone())}</div>
                <div class="action-dialog__content">
                    <h3>{stored.with_value(|v| v.name.clone())}</h3>
                    <p>{stored.with_value(|v| v.description.clone().unwrap_or_default())}</p>
                </div>
                <div class="action-dialog__actions">
                    <VocabularyAction
                        phase=phase
                        acronym=stored.with_value(|v| v.acronym.clone())
                        name=stored.with_value(|v| v.name.clone())
                        on_install=on_install
                        on_uninstall=on_uninstall
                    />
                </div>
            </ModalFrame>
        </Show>

        {move || failure.get().map(|f| view! {
            <ModalFrame on_close=Callback::new(move |_| failure.set(None)) modal_class="action-dialog".to_string()>
                <div class="action-dialog__title action-dialog__title--error">{f.title()}</div>
                <div class="action-dialog__content">
                    <h3>{f.name.clone()}</h3>
                    <p class="action-dialog__subtitle">
                        {format!("Version: {}", f.version.clone().unwrap_or_default())}
                    </p>
                    <p class="action-dialog__error">{f.message.clone()}</p>
                </div>
                <div class="action-dialog__actions">
                    <Button on_click=move |_| failure.set(None)>"Close"</Button>
                </div>
            </ModalFrame>
        })}
    }
}
