use crate::domain::a004_questionnaire::number::NumberConstraints;
use leptos::prelude::*;
use thaw::*;

/// Numeric question with optional preset answers. Only valid values reach
/// `on_change`; invalid input shows the error text inline.
#[component]
pub fn NumberQuestion(
    /// Question text.
    #[prop(into)]
    text: String,
    /// Input name used for form submission.
    #[prop(into)]
    name: String,
    #[prop(optional)]
    constraints: NumberConstraints,
    /// Preset answers offered next to the free input, e.g. "<18".
    #[prop(optional)]
    defaults: Vec<String>,
    #[prop(optional)]
    on_change: Option<Callback<Option<String>>>,
) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let preset = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let constraints = StoredValue::new(constraints);

    // The answer submitted with the form: a preset wins over free input.
    let answer = Memo::new(move |_| {
        let preset = preset.get();
        if !preset.is_empty() {
            return Some(preset);
        }
        let text = input.get();
        if text.is_empty() {
            return None;
        }
        match constraints.with_value(|c| c.validate(&text)) {
            Ok(_) => Some(text),
            Err(_) => None,
        }
    });

    Effect::new(move |_| {
        let text = input.get();
        if text.is_empty() {
            error.set(None);
            return;
        }
        if !preset.get_untracked().is_empty() {
            preset.set(String::new());
        }
        error.set(constraints.with_value(|c| c.validate(&text)).err().map(|e| e.to_string()));
    });

    Effect::new(move |_| {
        let value = answer.get();
        if let Some(on_change) = on_change {
            on_change.run(value);
        }
    });

    let (min, max) = constraints.with_value(|c| (c.min, c.max));

    view! {
        <div class="question question--number">
            <div class="question__text">{text}</div>
            {move || error.get().map(|e| view! { <div class="question__error">{e}</div> })}
            {(!defaults.is_empty()).then(|| view! {
                <RadioGroup value=preset>
                    {defaults.iter().map(|d| view! { <Radio value=d.clone() label=d.clone()/> }).collect_view()}
                </RadioGroup>
            })}
            <Input
                value=input
                input_type=InputType::Number
                attr:min=min.map(|v| v.to_string())
                attr:max=max.map(|v| v.to_string())
            />
            <input type="hidden" name=name prop:value=move || answer.get().unwrap_or_default() />
        </div>
    }
}
