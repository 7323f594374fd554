//! Documents step: two one-of-two groups of slot cards.

use kyc::{SlotGroup, SlotId, Wizard};
use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::file_upload_card::FileUploadCard;
use crate::components::live_selfie_card::LiveSelfieCard;

#[component]
pub fn DocumentsStep() -> impl IntoView {
    view! {
        <section class="kyc-step">
            <header class="kyc-step__header">
                <h2>"KYC Documents"</h2>
                <p class="kyc-step__subtitle">"Upload your verification documents"</p>
            </header>
            {SlotGroup::ALL.into_iter().map(|group| view! { <SlotGroupSection group=group/> }).collect_view()}
        </section>
    }
}

#[component]
fn SlotGroupSection(group: SlotGroup) -> impl IntoView {
    let wizard = expect_context::<RwSignal<Wizard>>();
    let error = move || wizard.with(|w| w.errors().get(group.error_key()).map(str::to_owned));
    let (first, second) = group.alternatives();

    view! {
        <div class="slot-group">
            <h3 class="slot-group__title">{group.title()}<span class="slot-group__hint">" (one required)"</span></h3>
            <div class="slot-group__cards">
                {slot_card(first)}
                {slot_card(second)}
            </div>
            {move || error().map(|message| view! { <p class="kyc-field__error">{message}</p> })}
        </div>
    }
}

fn slot_card(slot: SlotId) -> AnyView {
    if slot.is_camera() {
        view! { <LiveSelfieCard/> }.into_any()
    } else {
        view! { <FileUploadCard slot_id=slot/> }.into_any()
    }
}
