//! Confirmation shown after a successful submission.

use kyc::{Wizard, WizardPhase};
use leptos::prelude::*;

#[component]
pub fn SuccessModal() -> impl IntoView {
    let wizard = expect_context::<RwSignal<Wizard>>();

    let reference = move || {
        wizard.with(|w| match w.phase() {
            WizardPhase::Submitted { reference } => Some(reference.clone()),
            _ => None,
        })
    };
    let on_done = move |_| wizard.update(Wizard::acknowledge_success);

    view! {
        {move || reference().map(|reference| view! {
            <div class="success-modal">
                <div class="success-modal__backdrop" on:click=on_done></div>
                <div class="success-modal__panel">
                    <div class="success-modal__badge">"✓"</div>
                    <h2 class="success-modal__title">"KYC Submitted Successfully!"</h2>
                    <p class="success-modal__body">
                        "Thank you for completing your KYC verification. Our team will review your documents and get back to you within 24-48 hours."
                    </p>
                    <p class="success-modal__reference">
                        <span class="success-modal__dot"></span>
                        {format!("Application Reference: {reference}")}
                    </p>
                    <button class="btn btn--primary btn--block" on:click=on_done>"Done"</button>
                </div>
            </div>
        })}
    }
}
