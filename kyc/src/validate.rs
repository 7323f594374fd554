//! Per-step validation.
//!
//! Every validator is a pure function of the state it reads and returns a
//! [`FieldErrors`] bag; an empty bag means the step may be left. Validators
//! never run per keystroke, only when the wizard tries to move forward or
//! submit.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::field::{ErrorKey, FieldErrors, TextField};
use crate::form::FormState;
use crate::selector::SlotGroup;
use crate::slot::FileSlots;
use crate::solutions::SolutionsSelection;
use crate::wizard::WizardStep;

const INVALID_EMAIL: &str = "Please enter a valid email";
const INVALID_PHONE: &str = "Please enter a valid 10-digit phone number";
const INVALID_WEBSITE: &str = "Please enter a valid URL (starting with http:// or https://)";
const NO_SOLUTION: &str = "Please select at least one solution";

// =============================================================================
// FIELD RULES
// =============================================================================

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the domain
/// with at least one character on either side.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Exactly ten digits once every non-digit is stripped.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    value.chars().filter(char::is_ascii_digit).count() == 10
}

/// `http://` or `https://` followed by at least one character.
#[must_use]
pub fn is_valid_website(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

fn required_message(field: TextField) -> &'static str {
    match field {
        TextField::Name => "Name is required",
        TextField::Email => "Email is required",
        TextField::Phone => "Phone number is required",
        TextField::Address => "Address is required",
        TextField::CompanyName => "Company name is required",
        TextField::CompanyWebsite => "Company website is required",
        TextField::CompanyEmail => "Company email is required",
    }
}

/// Check one field: required first, then its shape rule if it has one.
fn check_field(form: &FormState, field: TextField, errors: &mut FieldErrors) {
    let value = form.get(field);
    if value.trim().is_empty() {
        errors.insert(field, required_message(field));
        return;
    }
    let shape_error = match field {
        TextField::Email | TextField::CompanyEmail => (!is_valid_email(value)).then_some(INVALID_EMAIL),
        TextField::Phone => (!is_valid_phone(value)).then_some(INVALID_PHONE),
        TextField::CompanyWebsite => (!is_valid_website(value)).then_some(INVALID_WEBSITE),
        TextField::Name | TextField::Address | TextField::CompanyName => None,
    };
    if let Some(message) = shape_error {
        errors.insert(field, message);
    }
}

// =============================================================================
// STEP VALIDATORS
// =============================================================================

#[must_use]
pub fn validate_personal_info(form: &FormState) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in TextField::PERSONAL {
        check_field(form, field, &mut errors);
    }
    errors
}

#[must_use]
pub fn validate_organization(form: &FormState) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in TextField::ORGANIZATION {
        check_field(form, field, &mut errors);
    }
    errors
}

/// One error per unsatisfied group, attached to the group key.
#[must_use]
pub fn validate_documents(slots: &FileSlots) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for group in SlotGroup::ALL {
        let (a, b) = group.alternatives();
        if !slots.is_filled(a) && !slots.is_filled(b) {
            errors.insert(group.error_key(), group.missing_message());
        }
    }
    errors
}

#[must_use]
pub fn validate_solutions(selection: &SolutionsSelection) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !selection.any() {
        errors.insert(ErrorKey::Solutions, NO_SOLUTION);
    }
    errors
}

/// Dispatch to the validator for `step`.
#[must_use]
pub fn validate_step(step: WizardStep, form: &FormState, slots: &FileSlots, solutions: &SolutionsSelection) -> FieldErrors {
    match step {
        WizardStep::PersonalInfo => validate_personal_info(form),
        WizardStep::Organization => validate_organization(form),
        WizardStep::Documents => validate_documents(slots),
        WizardStep::Solutions => validate_solutions(solutions),
    }
}
