//! # kyc-client
//!
//! Leptos + WASM frontend for the KYC intake wizard.
//!
//! All form, slot, camera and submission rules live in the `kyc` crate; this
//! crate only binds them to the DOM. A single `RwSignal<Wizard>` is provided
//! through context and every component mutates it through the wizard's named
//! setters.
//!
//! Browser-only code (media devices, file reads, HTTP) is gated behind the
//! `csr` feature so the crate still builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
