//! Root application component and context providers.

use kyc::Wizard;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config;
use crate::pages::kyc::KycPage;
use crate::state::notice::NoticeState;

/// Root application component.
///
/// Provides the wizard and the transient notice state to every child.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let wizard = RwSignal::new(Wizard::new(config::wizard_config()));
    let notices = RwSignal::new(NoticeState::default());

    provide_context(wizard);
    provide_context(notices);

    view! {
        <Title text="CrickFeed KYC"/>
        <KycPage/>
    }
}
