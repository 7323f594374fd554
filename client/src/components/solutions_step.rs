//! Solutions step: grouped checkboxes over the twelve add-ons.

use kyc::{ErrorKey, Solution, SolutionCategory, Wizard};
use leptos::prelude::*;

#[component]
pub fn SolutionsStep() -> impl IntoView {
    let wizard = expect_context::<RwSignal<Wizard>>();
    let error = move || wizard.with(|w| w.errors().get(ErrorKey::Solutions).map(str::to_owned));

    view! {
        <section class="kyc-step kyc-step--scroll">
            <header class="kyc-step__header">
                <h2>"Solutions & Add-Ons"</h2>
                <p class="kyc-step__subtitle">"Select the solutions you want for your client"</p>
            </header>
            {SolutionCategory::ALL
                .into_iter()
                .map(|category| {
                    view! {
                        <div class="solutions-group">
                            <h3 class="solutions-group__title">{category.title()}</h3>
                            {category.solutions().map(|solution| view! { <SolutionOption solution=solution/> }).collect_view()}
                        </div>
                    }
                })
                .collect_view()}
            {move || error().map(|message| view! { <p class="kyc-field__error">{message}</p> })}
        </section>
    }
}

#[component]
fn SolutionOption(solution: Solution) -> impl IntoView {
    let wizard = expect_context::<RwSignal<Wizard>>();
    let checked = move || wizard.with(|w| w.solutions().is_selected(solution));
    let on_change = move |ev: leptos::ev::Event| {
        let selected = event_target_checked(&ev);
        wizard.update(|w| w.set_solution(solution, selected));
    };
    let id = format!("solution-{}", solution.key());
    let input_id = id.clone();

    view! {
        <label class="solutions-option" for=id>
            <input id=input_id type="checkbox" prop:checked=checked on:change=on_change/>
            <span class="solutions-option__text">
                <span class="solutions-option__label">{solution.label()}</span>
                <span class="solutions-option__description">{solution.description()}</span>
            </span>
        </label>
    }
}
