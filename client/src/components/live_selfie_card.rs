//! Slot card for the live selfie; opens the camera modal instead of a picker.

use kyc::{DocumentFile, SlotId, Wizard};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::camera_capture::CameraCapture;

const SLOT: SlotId = SlotId::LiveSelfie;

#[component]
pub fn LiveSelfieCard() -> impl IntoView {
    let wizard = expect_context::<RwSignal<Wizard>>();
    let camera_open = RwSignal::new(false);

    let filled = move || wizard.with(|w| w.slots().is_filled(SLOT));
    let preview = move || wizard.with(|w| w.slots().get(SLOT).preview().map(str::to_owned));
    let error = move || wizard.with(|w| w.slots().get(SLOT).error().map(str::to_owned));

    let on_open = move |_| {
        if !filled() {
            camera_open.set(true);
        }
    };
    let on_remove = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        wizard.update(|w| {
            if let Err(e) = w.remove_slot(SLOT) {
                leptos::logging::warn!("remove selfie failed: {e}");
            }
        });
    };
    let on_capture = Callback::new(move |file: DocumentFile| {
        wizard.update(|w| {
            if let Err(e) = w.set_slot(SLOT, file) {
                leptos::logging::warn!("selfie rejected: {e}");
            }
        });
    });
    let on_close = Callback::new(move |()| camera_open.set(false));

    view! {
        <div
            class="upload-card upload-card--camera"
            class:upload-card--filled=filled
            class:upload-card--invalid=move || error().is_some() && !filled()
            on:click=on_open
        >
            {move || match preview() {
                Some(src) => view! {
                    <div class="upload-card__filled">
                        <img class="upload-card__thumb" src=src alt=SLOT.title()/>
                        <div class="upload-card__meta">
                            <p class="upload-card__title">{SLOT.title()}</p>
                            <p class="upload-card__status">"✓ Captured"</p>
                        </div>
                        <button class="upload-card__remove" title="Remove" on:click=on_remove>"✕"</button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="upload-card__empty">
                        <span class="upload-card__icon upload-card__icon--live">"◉"</span>
                        <div>
                            <p class="upload-card__title">{SLOT.title()}</p>
                            <p class="upload-card__description upload-card__description--accent">"Tap to open camera"</p>
                        </div>
                    </div>
                }
                .into_any(),
            }}
            {move || error().filter(|_| !filled()).map(|message| view! { <p class="upload-card__error">{message}</p> })}
        </div>
        <Show when=move || camera_open.get()>
            <CameraCapture on_capture=on_capture on_close=on_close/>
        </Show>
    }
}
