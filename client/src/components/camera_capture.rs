//! Live selfie modal driving a `kyc::CameraSession`.
//!
//! DESIGN
//! ======
//! The session is not `Send` (it holds JS handles), so it lives in a local
//! `StoredValue`; a plain `CameraView` snapshot signal drives rendering and is
//! refreshed after every session transition.
//!
//! Acquisition is split around the await: `begin_open` hands out a ticket,
//! `getUserMedia` resolves, and `finish_open` either accepts the stream or
//! reports it stale. Only an accepted stream is bound to the `<video>`. If
//! the modal was closed meanwhile the session is already gone, so the stream
//! is dropped and its tracks stop.
//!
//! Unmounting the modal closes the session via `on_cleanup`.

use kyc::{AcquireTicket, CameraSession, CameraStatus, DocumentFile, FacingMode};
use leptos::prelude::*;

use crate::util::camera::PreviewStream;

/// Render-facing copy of the session state.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CameraView {
    status: CameraStatus,
    facing: FacingMode,
    error: Option<&'static str>,
    still: Option<String>,
}

impl CameraView {
    fn of(session: &CameraSession<PreviewStream>) -> Self {
        Self {
            status: session.status(),
            facing: session.facing(),
            error: session.error_message(),
            still: session.pending_preview().map(str::to_owned),
        }
    }
}

#[component]
pub fn CameraCapture(on_capture: Callback<DocumentFile>, on_close: Callback<()>) -> impl IntoView {
    let session = StoredValue::new_local(CameraSession::<PreviewStream>::new(FacingMode::User));
    let shown = RwSignal::new(session.with_value(CameraView::of));
    let video_ref = NodeRef::<leptos::html::Video>::new();

    let sync = move || {
        if let Some(snapshot) = session.try_with_value(CameraView::of) {
            shown.try_set(snapshot);
        }
    };

    #[cfg(feature = "csr")]
    let acquire = move |ticket: AcquireTicket| {
        use kyc::{MediaDevices as _, OpenOutcome};

        sync();
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        let devices = crate::util::camera::BrowserDevices::new(video);
        leptos::task::spawn_local(async move {
            let result = devices.acquire(ticket.constraints()).await;
            let mut pending = Some(result);
            let outcome = session.try_update_value(|s| pending.take().map(|r| s.finish_open(ticket, r)));
            // Session disposed: whatever resolved is dropped here and stops.
            drop(pending);
            if outcome.flatten() == Some(OpenOutcome::Active) {
                session.try_with_value(|s| {
                    if let Some(stream) = s.stream() {
                        stream.bind();
                    }
                });
            }
            sync();
        });
    };
    #[cfg(not(feature = "csr"))]
    let acquire = move |_ticket: AcquireTicket| sync();

    // Open once the <video> exists.
    Effect::new(move || {
        if video_ref.get().is_none() {
            return;
        }
        let ticket = session.try_update_value(|s| (s.status() == CameraStatus::Idle).then(|| s.begin_open()));
        if let Some(ticket) = ticket.flatten() {
            acquire(ticket);
        }
    });

    on_cleanup(move || {
        session.try_update_value(CameraSession::close);
    });

    let on_retry = move |_| {
        if let Some(ticket) = session.try_update_value(CameraSession::retry).flatten() {
            acquire(ticket);
        }
    };
    let on_toggle = move |_| {
        if let Some(ticket) = session.try_update_value(CameraSession::toggle_facing) {
            acquire(ticket);
        }
    };
    let on_shutter = move |_| {
        if let Some(Err(e)) = session.try_update_value(CameraSession::capture) {
            leptos::logging::warn!("capture failed: {e}");
        }
        sync();
    };
    let on_retake = move |_| match session.try_update_value(CameraSession::retake) {
        Some(Ok(ticket)) => acquire(ticket),
        Some(Err(e)) => leptos::logging::warn!("retake failed: {e}"),
        None => {}
    };
    let on_confirm = move |_| match session.try_update_value(CameraSession::confirm) {
        Some(Ok(file)) => {
            on_capture.run(file);
            on_close.run(());
        }
        Some(Err(e)) => {
            leptos::logging::warn!("confirm failed: {e}");
            sync();
        }
        None => {}
    };
    let on_dismiss = move |_| {
        session.try_update_value(CameraSession::close);
        on_close.run(());
    };

    let status = move || shown.with(|v| v.status);
    let busy = move || !matches!(status(), CameraStatus::Active);
    let still = move || shown.with(|v| v.still.clone());

    view! {
        <div class="camera-modal">
            <div class="camera-modal__backdrop" on:click=on_dismiss></div>
            <div class="camera-modal__panel">
                <header class="camera-modal__header">
                    <h3>"Take Live Selfie"</h3>
                    <button class="camera-modal__close" title="Close" on:click=on_dismiss>"✕"</button>
                </header>

                <div class="camera-modal__view">
                    <video
                        node_ref=video_ref
                        class="camera-modal__video"
                        class:camera-modal__video--mirrored=move || shown.with(|v| v.facing.is_mirrored())
                        class:hidden=move || still().is_some()
                        autoplay=true
                        playsinline=true
                        muted=true
                    ></video>
                    {move || still().map(|src| view! { <img class="camera-modal__still" src=src alt="Captured selfie"/> })}

                    <Show when=move || status() == CameraStatus::Loading>
                        <div class="camera-modal__overlay">
                            <span class="spinner"></span>
                            <p>"Starting camera..."</p>
                        </div>
                    </Show>
                    <Show when=move || status() == CameraStatus::Error>
                        <div class="camera-modal__overlay">
                            <p class="camera-modal__error">{move || shown.with(|v| v.error.unwrap_or_default())}</p>
                            <button class="btn btn--outline" on:click=on_retry>"Try Again"</button>
                        </div>
                    </Show>
                    <Show when=move || status() == CameraStatus::Active>
                        <div class="camera-modal__guide"></div>
                    </Show>
                </div>

                <Show
                    when=move || status() == CameraStatus::PendingConfirmation
                    fallback=move || view! {
                        <div class="camera-modal__controls">
                            <button class="btn btn--outline btn--round" title="Switch camera" disabled=busy on:click=on_toggle>"⟲"</button>
                            <button class="camera-modal__shutter" title="Capture" disabled=busy on:click=on_shutter></button>
                            <span class="camera-modal__spacer"></span>
                        </div>
                        <p class="camera-modal__tip">"Position your face within the oval and ensure good lighting"</p>
                    }
                >
                    <div class="camera-modal__controls">
                        <button class="btn btn--outline" on:click=on_retake>"Retake"</button>
                        <button class="btn btn--success" on:click=on_confirm>"Use This Photo"</button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
