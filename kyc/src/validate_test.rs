use super::*;
use crate::document::{DocumentFile, IntakeSource};
use crate::slot::SlotId;
use crate::solutions::Solution;

fn valid_personal() -> FormState {
    let mut form = FormState::default();
    form.set(TextField::Name, "Asha Rao");
    form.set(TextField::Email, "asha@example.com");
    form.set(TextField::Phone, "987-654-3210");
    form.set(TextField::Address, "12 MG Road, Bengaluru");
    form
}

fn valid_organization() -> FormState {
    let mut form = FormState::default();
    form.set(TextField::CompanyName, "Acme Gaming");
    form.set(TextField::CompanyWebsite, "https://acme.example");
    form.set(TextField::CompanyEmail, "ops@acme.example");
    form
}

fn doc() -> DocumentFile {
    DocumentFile::new("d.png", "image/png", b"d".to_vec(), IntakeSource::Picker)
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_simple_address() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last@sub.example.co"));
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["user@", "user.com", "@example.com", "user@example", "user@.com", "user@example.", "a b@c.d", "a@b@c.d"] {
        assert!(!is_valid_email(bad), "{bad}");
    }
}

// =============================================================
// Phone
// =============================================================

#[test]
fn phone_accepts_ten_digits_with_or_without_separators() {
    assert!(is_valid_phone("9876543210"));
    assert!(is_valid_phone("987-654-3210"));
    assert!(is_valid_phone("(987) 654 3210"));
}

#[test]
fn phone_rejects_wrong_digit_counts() {
    assert!(!is_valid_phone("98765"));
    assert!(!is_valid_phone("98765432101"));
    assert!(!is_valid_phone("phone"));
}

// =============================================================
// Website
// =============================================================

#[test]
fn website_requires_http_scheme_and_host() {
    assert!(is_valid_website("http://a"));
    assert!(is_valid_website("https://acme.example/path"));
    assert!(!is_valid_website("https://"));
    assert!(!is_valid_website("acme.example"));
    assert!(!is_valid_website("ftp://acme.example"));
}

// =============================================================
// Personal info step
// =============================================================

#[test]
fn personal_info_valid_form_has_no_errors() {
    assert!(validate_personal_info(&valid_personal()).is_empty());
}

#[test]
fn personal_info_blank_form_reports_every_field_as_required() {
    let errors = validate_personal_info(&FormState::default());
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get(TextField::Name), Some("Name is required"));
    assert_eq!(errors.get(TextField::Email), Some("Email is required"));
    assert_eq!(errors.get(TextField::Phone), Some("Phone number is required"));
    assert_eq!(errors.get(TextField::Address), Some("Address is required"));
}

#[test]
fn personal_info_whitespace_only_counts_as_missing() {
    let mut form = valid_personal();
    form.set(TextField::Name, "   ");
    let errors = validate_personal_info(&form);
    assert_eq!(errors.get(TextField::Name), Some("Name is required"));
}

#[test]
fn personal_info_shape_errors_use_specific_messages() {
    let mut form = valid_personal();
    form.set(TextField::Email, "user@");
    form.set(TextField::Phone, "98765");
    let errors = validate_personal_info(&form);
    assert_eq!(errors.get(TextField::Email), Some("Please enter a valid email"));
    assert_eq!(errors.get(TextField::Phone), Some("Please enter a valid 10-digit phone number"));
    assert!(!errors.contains(TextField::Name));
}

#[test]
fn personal_info_ignores_organization_fields() {
    let errors = validate_personal_info(&valid_personal());
    assert!(!errors.contains(TextField::CompanyName));
}

// =============================================================
// Organization step
// =============================================================

#[test]
fn organization_valid_form_has_no_errors() {
    assert!(validate_organization(&valid_organization()).is_empty());
}

#[test]
fn organization_rejects_schemeless_website_and_bad_email() {
    let mut form = valid_organization();
    form.set(TextField::CompanyWebsite, "acme.example");
    form.set(TextField::CompanyEmail, "ops.acme.example");
    let errors = validate_organization(&form);
    assert_eq!(
        errors.get(TextField::CompanyWebsite),
        Some("Please enter a valid URL (starting with http:// or https://)")
    );
    assert_eq!(errors.get(TextField::CompanyEmail), Some("Please enter a valid email"));
}

// =============================================================
// Documents step
// =============================================================

#[test]
fn documents_empty_reports_both_group_errors() {
    let errors = validate_documents(&FileSlots::default());
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(ErrorKey::IdDocument), Some("Please upload either Passport Photo or Aadhar Card"));
    assert_eq!(errors.get(ErrorKey::PhotoDocument), Some("Please upload either Live Selfie or Gallery Photo"));
    assert!(!errors.contains(SlotId::PassportPhoto));
}

#[test]
fn documents_one_of_each_group_is_valid() {
    let mut slots = FileSlots::default();
    slots.get_mut(SlotId::AadharCard).set(Some(doc()));
    slots.get_mut(SlotId::LiveSelfie).set(Some(doc()));
    assert!(validate_documents(&slots).is_empty());
}

#[test]
fn documents_missing_photo_only_reports_photo_group() {
    let mut slots = FileSlots::default();
    slots.get_mut(SlotId::PassportPhoto).set(Some(doc()));
    let errors = validate_documents(&slots);
    assert_eq!(errors.len(), 1);
    assert!(errors.contains(ErrorKey::PhotoDocument));
}

// =============================================================
// Solutions step
// =============================================================

#[test]
fn solutions_requires_one_flag() {
    let mut selection = SolutionsSelection::default();
    assert_eq!(validate_solutions(&selection).get(ErrorKey::Solutions), Some("Please select at least one solution"));
    selection.set(Solution::Regulatory, true);
    assert!(validate_solutions(&selection).is_empty());
}

#[test]
fn validate_step_dispatches_by_step() {
    let form = valid_personal();
    let slots = FileSlots::default();
    let selection = SolutionsSelection::default();
    assert!(validate_step(WizardStep::PersonalInfo, &form, &slots, &selection).is_empty());
    assert_eq!(validate_step(WizardStep::Organization, &form, &slots, &selection).len(), 3);
    assert_eq!(validate_step(WizardStep::Documents, &form, &slots, &selection).len(), 2);
    assert_eq!(validate_step(WizardStep::Solutions, &form, &slots, &selection).len(), 1);
}
