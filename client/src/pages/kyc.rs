//! The single KYC wizard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the header, step indicator, the active step and the
//! Previous / Next / Submit bar. Navigation and submission go through
//! `Wizard`; this page only turns their outcomes into notices.

use kyc::{TextField, Wizard, WizardError, WizardStep};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::documents_step::DocumentsStep;
use crate::components::notice_banner::NoticeBanner;
use crate::components::solutions_step::SolutionsStep;
use crate::components::step_indicator::StepIndicator;
use crate::components::success_modal::SuccessModal;
use crate::components::text_step::TextStep;
use crate::state::notice::{NoticeState, submit_failure_description};

#[cfg(test)]
#[path = "kyc_test.rs"]
mod kyc_test;

#[component]
pub fn KycPage() -> impl IntoView {
    let wizard = expect_context::<RwSignal<Wizard>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_previous = move |_| {
        wizard.update(|w| {
            w.previous();
        });
    };
    let on_next = move |_| {
        let Some(advanced) = wizard.try_update(Wizard::next) else {
            return;
        };
        let step = wizard.with_untracked(Wizard::step);
        if advanced {
            notify(notices, |n| n.step_completed(step));
        } else {
            notify(notices, |n| n.step_invalid(step));
        }
    };
    let on_submit = move |_| submit(wizard, notices);

    let step = current_step(wizard);
    let is_first = move || wizard.with(Wizard::is_first_step);
    let is_last = move || wizard.with(Wizard::is_last_step);
    let submitting = move || wizard.with(Wizard::is_submitting);

    view! {
        <div class="kyc-page">
            <header class="kyc-page__header">
                <span class="kyc-page__badge">"Secure KYC Verification"</span>
                <h1>
                    <span class="text-gradient">"CrickFeed"</span>
                    " KYC"
                </h1>
            </header>

            <main class="kyc-page__main">
                <StepIndicator/>
                <div class="kyc-card">
                    {move || match step.get() {
                        WizardStep::PersonalInfo => view! {
                            <TextStep
                                title="Personal Information"
                                subtitle="Please provide your personal details"
                                fields={&TextField::PERSONAL}
                            />
                        }
                        .into_any(),
                        WizardStep::Organization => view! {
                            <TextStep
                                title="Organization Details"
                                subtitle="Tell us about your organization"
                                fields={&TextField::ORGANIZATION}
                            />
                        }
                        .into_any(),
                        WizardStep::Documents => view! { <DocumentsStep/> }.into_any(),
                        WizardStep::Solutions => view! { <SolutionsStep/> }.into_any(),
                    }}

                    {move || {
                        wizard
                            .with(|w| w.submit_error().map(submit_failure_description))
                            .map(|message| view! {
                                <div class="kyc-card__submit-error" role="alert">
                                    <span>{message}</span>
                                    <button
                                        class="kyc-card__dismiss"
                                        title="Dismiss"
                                        on:click=move |_| wizard.update(Wizard::dismiss_submit_error)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            })
                    }}

                    <nav class="kyc-card__nav">
                        <button class="btn btn--outline" disabled=move || is_first() || submitting() on:click=on_previous>
                            "← Previous"
                        </button>
                        <Show
                            when=is_last
                            fallback=move || view! {
                                <button class="btn btn--primary" on:click=on_next>"Next →"</button>
                            }
                        >
                            <button class="btn btn--primary btn--gradient" disabled=submitting on:click=on_submit>
                                {move || if submitting() { "Submitting..." } else { "Submit KYC →" }}
                            </button>
                        </Show>
                    </nav>
                </div>
            </main>

            <footer class="kyc-page__footer">"Your data is protected with 256-bit encryption"</footer>

            <SuccessModal/>
            <NoticeBanner/>
        </div>
    }
}

/// The active step, changing only on navigation. Keying the step view on
/// this keeps edits inside a step from rebuilding it.
fn current_step(wizard: RwSignal<Wizard>) -> Memo<WizardStep> {
    Memo::new(move |_| wizard.with(Wizard::step))
}

/// Start a submission and report its outcome.
fn submit(wizard: RwSignal<Wizard>, notices: RwSignal<NoticeState>) {
    let ticket = match wizard.try_update(Wizard::begin_submit) {
        Some(Ok(ticket)) => ticket,
        Some(Err(WizardError::Invalid)) => {
            let step = wizard.with_untracked(Wizard::step);
            notify(notices, |n| n.step_invalid(step));
            return;
        }
        Some(Err(e)) => {
            leptos::logging::warn!("submit ignored: {e}");
            return;
        }
        None => return,
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use kyc::Submitter as _;

        let submitter = crate::net::api::RelaySubmitter::new(crate::config::relay_url());
        let result = submitter.submit(ticket.payload()).await;
        let failure = result.as_ref().err().cloned();
        if !wizard.try_update(|w| w.finish_submit(ticket, result)).unwrap_or(false) {
            return;
        }
        match failure {
            None => notify(notices, NoticeState::submitted),
            Some(e) => {
                leptos::logging::warn!("submission failed: {e}");
                notify(notices, |n| n.submit_failed(&e));
            }
        }
    });

    #[cfg(not(feature = "csr"))]
    let _ = ticket;
}

/// Show a notice and schedule its own dismissal.
fn notify(notices: RwSignal<NoticeState>, show: impl FnOnce(&mut NoticeState) -> u64) {
    let Some(seq) = notices.try_update(show) else {
        return;
    };

    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(crate::state::notice::NOTICE_TTL_MS, move || {
        notices.try_update(|n| n.dismiss(seq));
    })
    .forget();

    #[cfg(not(feature = "csr"))]
    let _ = seq;
}
