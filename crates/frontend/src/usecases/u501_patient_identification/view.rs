use super::api;
use super::model::{IdentificationForm, IdentificationProgress};
use crate::shared::config::use_config;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::usecases::u502_terms_of_use::TermsOfUseDialog;
use contracts::usecases::u501_patient_identification::response::IdentifiedPatient;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn PatientIdentificationPage(
    /// Receives the identified patient once the Terms of Use are accepted.
    #[prop(optional)]
    on_success: Option<Callback<IdentifiedPatient>>,
) -> impl IntoView {
    let config = use_config();
    let app_name = config.with_value(|c| c.app.title.clone());

    let dob = RwSignal::new(String::new());
    let mrn = RwSignal::new(String::new());
    let health_card = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let progress = RwSignal::new(IdentificationProgress::default());
    let mrn_helper_open = RwSignal::new(false);

    let completed = Memo::new(move |_| progress.with(IdentificationProgress::completed));
    Effect::new(move |_| {
        if let Some(patient) = completed.get() {
            log::info!("Patient identified");
            if let Some(on_success) = on_success {
                on_success.run(patient);
            }
        }
    });

    let submit = move |_| {
        let form = IdentificationForm {
            date_of_birth: dob.get_untracked(),
            mrn: mrn.get_untracked(),
            health_card: health_card.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        progress.update(IdentificationProgress::clear);
        submitting.set(true);
        spawn_local(async move {
            let proms = config.with_value(|c| c.proms.clone());
            let result = api::validate_credentials(&proms, &request).await;
            submitting.set(false);
            match result {
                Ok((patient, visit)) => progress.update(|p| p.identified(patient, visit)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <PageFrame page_id="u501_patient_identification--main" category=PAGE_CAT_USECASE>
            <Show when=move || progress.with(IdentificationProgress::awaiting_terms)>
                <TermsOfUseDialog
                    open=Signal::derive(|| true)
                    action_required=true
                    on_close=Callback::new(move |_| progress.update(IdentificationProgress::clear))
                    on_accept=Callback::new(move |_| progress.update(|p| p.terms_accepted = true))
                    on_decline=Callback::new(move |_| progress.update(IdentificationProgress::clear))
                />
            </Show>

            <Show when=move || mrn_helper_open.get()>
                <ModalFrame on_close=Callback::new(move |_| mrn_helper_open.set(false)) modal_class="mrn-helper".to_string()>
                    <div class="mrn-helper__title">"Where can I find my MRN?"</div>
                    <p>"1. Check the top right-hand corner of your Patient Itinerary."</p>
                    <img
                        src="/libs/cards/resources/mrn_helper_1.png"
                        alt="MRN location within the Appointment Itinerary"
                        class="mrn-helper__image"
                    />
                    <p>"2. Check your account page on the myUHN PatientPortal."</p>
                    <img
                        src="/libs/cards/resources/mrn_helper_2.png"
                        alt="MRN location within the Patient Portal side bar"
                        class="mrn-helper__image"
                    />
                    <Button on_click=move |_| mrn_helper_open.set(false)>"Close"</Button>
                </ModalFrame>
            </Show>

            {move || match completed.get() {
                Some(identified) if on_success.is_none() => {
                    let name = identified.patient.first_name.clone().unwrap_or_default();
                    view! {
                        <div class="identification identification--done">
                            <h2>{format!("Welcome {name}")}</h2>
                            <p>"Your identity has been confirmed."</p>
                        </div>
                    }.into_any()
                }
                _ => view! {
                    <div class="identification">
                        <img src="/libs/cards/resources/logo_light_bg.png" class="identification__logo" alt="logo" />
                        <div class="identification__description">
                            <h2>{format!("Welcome to {app_name}")}</h2>
                            <p>{format!(
                                "{app_name} is designed to ask you the most important questions about your health and well being. Your responses will remain confidential and will help your provider determine how we can best help you."
                            )}</p>
                            <p>"Completing the questionnaire is voluntary, so if you would rather not complete it, you do not have to."</p>
                            <p>"If routine service evaluations or research projects are undertaken, your responses may be analyzed in a completely anonymous way."</p>
                        </div>
                        {move || match error.get() {
                            Some(e) => view! { <p class="identification__error">{e}</p> }.into_any(),
                            None => view! { <h3>"Enter the following information for identification"</h3> }.into_any(),
                        }}
                        <label class="identification__label">"Date of birth"</label>
                        <Input value=dob input_type=InputType::Date />
                        <div class="identification__identifiers">
                            <div class="identification__field">
                                <label class="identification__label">"MRN"</label>
                                <Input value=mrn input_type=InputType::Number placeholder="1234567" />
                                <a class="identification__helper" on:click=move |_| mrn_helper_open.set(true)>
                                    "Where can I find my MRN?"
                                </a>
                            </div>
                            <div class="identification__divider">"or"</div>
                            <div class="identification__field">
                                <label class="identification__label">"Health card number"</label>
                                <Input value=health_card placeholder="2345 678 901 XY" />
                            </div>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=submitting
                            on_click=submit
                        >
                            "Submit"
                        </Button>
                    </div>
                }.into_any(),
            }}
        </PageFrame>
    }
}
