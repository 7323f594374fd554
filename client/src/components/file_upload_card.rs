//! Document slot card accepting a picked or dropped file.
//!
//! SYSTEM CONTEXT
//! ==============
//! The card never decides acceptance itself: bytes are read, wrapped in a
//! `DocumentFile` and handed to `Wizard::set_slot`, which applies the slot's
//! accept filter and the one-of-two rule for its group.

#[cfg(feature = "csr")]
use kyc::IntakeSource;
use kyc::{SlotId, Wizard};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::files::thumbnail;

#[component]
pub fn FileUploadCard(slot_id: SlotId) -> impl IntoView {
    let wizard = expect_context::<RwSignal<Wizard>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let dragging = RwSignal::new(false);

    let filled = move || wizard.with(|w| w.slots().is_filled(slot_id));
    let thumb_src = move || wizard.with(|w| thumbnail(w.slots().get(slot_id)).map(str::to_owned));
    let file_name = move || {
        wizard.with(|w| w.slots().get(slot_id).file().map(|f| f.name().to_owned()).unwrap_or_default())
    };
    let error = move || wizard.with(|w| w.slots().get(slot_id).error().map(str::to_owned));

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };
    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(true);
    };
    let on_drag_leave = move |_| dragging.set(false);
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        #[cfg(feature = "csr")]
        {
            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
                intake(wizard, slot_id, file, IntakeSource::DragDrop);
            }
        }
    };
    let on_change = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::Event| {
                let input: web_sys::HtmlInputElement = event_target(&ev);
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    intake(wizard, slot_id, file, IntakeSource::Picker);
                }
                // Allow re-picking the same file after removal.
                input.set_value("");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };
    let on_remove = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        wizard.update(|w| {
            if let Err(e) = w.remove_slot(slot_id) {
                leptos::logging::warn!("remove {slot_id:?} failed: {e}");
            }
        });
    };

    view! {
        <div
            class="upload-card"
            class:upload-card--dragging=move || dragging.get()
            class:upload-card--filled=filled
            class:upload-card--invalid=move || error().is_some() && !filled()
            on:click=on_click
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <input
                node_ref=input_ref
                type="file"
                class="hidden"
                accept=slot_id.accept().as_attr().to_owned()
                on:change=on_change
            />
            <Show
                when=filled
                fallback=move || view! {
                    <div class="upload-card__empty">
                        <span class="upload-card__icon">"⇪"</span>
                        <div>
                            <p class="upload-card__title">{slot_id.title()}</p>
                            <p class="upload-card__description">{slot_id.description()}</p>
                        </div>
                    </div>
                }
            >
                <div class="upload-card__filled">
                    {move || match thumb_src() {
                        Some(src) => view! { <img class="upload-card__thumb" src=src alt=slot_id.title()/> }.into_any(),
                        None => view! { <span class="upload-card__thumb upload-card__thumb--doc" title=file_name>"📄"</span> }.into_any(),
                    }}
                    <div class="upload-card__meta">
                        <p class="upload-card__title">{slot_id.title()}</p>
                        <p class="upload-card__status">"✓ Uploaded"</p>
                    </div>
                    <button class="upload-card__remove" title="Remove" on:click=on_remove>"✕"</button>
                </div>
            </Show>
            {move || error().filter(|_| !filled()).map(|message| view! { <p class="upload-card__error">{message}</p> })}
        </div>
    }
}

/// Read `file` and offer it to `slot`. Rejections are recorded on the slot by
/// the wizard; read failures are only logged.
#[cfg(feature = "csr")]
pub(crate) fn intake(wizard: RwSignal<Wizard>, slot: SlotId, file: web_sys::File, source: IntakeSource) {
    leptos::task::spawn_local(async move {
        match crate::util::files::read_document(&file, source).await {
            Ok(document) => {
                wizard.try_update(|w| {
                    if let Err(e) = w.set_slot(slot, document) {
                        leptos::logging::warn!("rejected file for {slot:?}: {e}");
                    }
                });
            }
            Err(e) => leptos::logging::warn!("{e}"),
        }
    });
}
