//! Row of step bubbles above the form.

#[cfg(test)]
#[path = "step_indicator_test.rs"]
mod step_indicator_test;

use kyc::Wizard;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepMark {
    Completed,
    Active,
    Upcoming,
}

impl StepMark {
    pub fn of(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => Self::Completed,
            std::cmp::Ordering::Equal => Self::Active,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Completed => "step-indicator__bubble step-indicator__bubble--completed",
            Self::Active => "step-indicator__bubble step-indicator__bubble--active",
            Self::Upcoming => "step-indicator__bubble",
        }
    }
}

/// Connector after step `index` is filled once that step is behind us.
pub fn connector_filled(index: usize, current: usize) -> bool {
    index < current
}

#[component]
pub fn StepIndicator() -> impl IntoView {
    let wizard = expect_context::<RwSignal<Wizard>>();

    let current = move || wizard.with(Wizard::step_index);
    let steps = move || wizard.with(|w| w.steps().iter().copied().enumerate().collect::<Vec<_>>());

    view! {
        <ol class="step-indicator">
            <For
                each=steps
                key=|(index, step)| (*index, *step)
                children=move |(index, step)| {
                    let total = wizard.with_untracked(|w| w.steps().len());
                    let mark = move || StepMark::of(index, current());
                    view! {
                        <li class="step-indicator__item">
                            <span class=move || mark().class()>
                                {move || match mark() {
                                    StepMark::Completed => "✓".to_owned(),
                                    _ => (index + 1).to_string(),
                                }}
                            </span>
                            <span class="step-indicator__title">{step.title()}</span>
                            <Show when=move || index + 1 < total>
                                <span
                                    class="step-indicator__connector"
                                    class:step-indicator__connector--filled=move || connector_filled(index, current())
                                ></span>
                            </Show>
                        </li>
                    }
                }
            />
        </ol>
    }
}
