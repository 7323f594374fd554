//! One view for every plain text step (personal info, organization).

use kyc::{TextField, Wizard};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

#[component]
pub fn TextStep(title: &'static str, subtitle: &'static str, fields: &'static [TextField]) -> impl IntoView {
    view! {
        <section class="kyc-step">
            <header class="kyc-step__header">
                <h2>{title}</h2>
                <p class="kyc-step__subtitle">{subtitle}</p>
            </header>
            <div class="kyc-step__fields">
                {fields.iter().map(|&field| view! { <TextInput field=field/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TextInput(field: TextField) -> impl IntoView {
    let wizard = expect_context::<RwSignal<Wizard>>();

    let value = move || wizard.with(|w| w.form().get(field).to_owned());
    let error = move || wizard.with(|w| w.errors().get(field).map(str::to_owned));
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        wizard.update(|w| w.set_field(field, next));
    };

    let id = format!("kyc-{}", field.as_str());
    let control = if field.is_multiline() {
        view! {
            <textarea
                id=id.clone()
                class="kyc-input kyc-input--multiline"
                class:kyc-input--invalid=move || error().is_some()
                placeholder=field.placeholder()
                rows="3"
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                class="kyc-input"
                class:kyc-input--invalid=move || error().is_some()
                type=field.input_type()
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="kyc-field">
            <label for=id class="kyc-field__label">
                {field.label()}
                <span class="kyc-field__required">" *"</span>
            </label>
            {control}
            {move || error().map(|message| view! { <p class="kyc-field__error">{message}</p> })}
        </div>
    }
}
