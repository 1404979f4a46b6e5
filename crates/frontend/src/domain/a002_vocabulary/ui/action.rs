use crate::domain::a002_vocabulary::catalog::Phase;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

const UNINSTALL_WARNING: &str =
    "Uninstalling this vocabulary may result in data not being properly standardized. Proceed?";

/// Install / update / uninstall buttons for the current phase.
#[component]
pub fn VocabularyAction(
    #[prop(into)]
    phase: Signal<Phase>,
    #[prop(into)]
    acronym: String,
    #[prop(into)]
    name: String,
    on_install: Callback<()>,
    on_uninstall: Callback<()>,
) -> impl IntoView {
    let confirm_open = RwSignal::new(false);
    let close = Callback::new(move |_| confirm_open.set(false));
    let acronym = StoredValue::new(acronym);
    let name = StoredValue::new(name);

    view! {
        {move || match phase.get() {
            Phase::NotInstalled => view! {
                <Button
                    class="vocab-action vocab-action--install"
                    appearance=ButtonAppearance::Primary
                    attr:title="Install this vocabulary"
                    on_click=move |_| on_install.run(())
                >
                    "Install"
                </Button>
            }.into_any(),
            Phase::Installing => view! {
                <span class="vocab-action__busy">
                    <Button disabled=true>"Installing"</Button>
                    <Spinner size=SpinnerSize::Tiny />
                </span>
            }.into_any(),
            Phase::UpdateAvailable => view! {
                <Button
                    class="vocab-action vocab-action--update"
                    attr:title="Update this vocabulary"
                    on_click=move |_| on_install.run(())
                >
                    "Update"
                </Button>
                <Button
                    class="vocab-action vocab-action--uninstall"
                    attr:title="Remove this vocabulary"
                    on_click=move |_| on_uninstall.run(())
                >
                    "Uninstall"
                </Button>
            }.into_any(),
            Phase::Uninstalling => view! {
                <span class="vocab-action__busy">
                    <Button disabled=true>"Uninstalling"</Button>
                    <Spinner size=SpinnerSize::Tiny />
                </span>
            }.into_any(),
            Phase::Latest => view! {
                <Button
                    class="vocab-action vocab-action--uninstall"
                    attr:title="Remove this vocabulary"
                    on_click=move |_| confirm_open.set(true)
                >
                    "Uninstall"
                </Button>
            }.into_any(),
        }}

        <Show when=move || confirm_open.get()>
            <ModalFrame on_close=close modal_class="action-dialog".to_string()>
                <div class="action-dialog__title">{acronym.get_value()}</div>
                <div class="action-dialog__content">
                    <h3>{name.get_value()}</h3>
                    <p>{UNINSTALL_WARNING}</p>
                </div>
                <div class="action-dialog__actions">
                    <Button
                        class="vocab-action--uninstall"
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            confirm_open.set(false);
                            on_uninstall.run(());
                        }
                    >
                        "Uninstall"
                    </Button>
                    <Button on_click=move |_| close.run(())>"Cancel"</Button>
                </div>
            </ModalFrame>
        </Show>
    }
}
