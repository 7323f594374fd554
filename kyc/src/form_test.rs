use super::*;

#[test]
fn default_form_is_blank() {
    let form = FormState::default();
    assert!(form.is_blank());
    for field in TextField::ALL {
        assert_eq!(form.get(field), "");
    }
}

#[test]
fn set_writes_only_the_named_field() {
    let mut form = FormState::default();
    assert!(form.set(TextField::CompanyWebsite, "https://acme.test"));
    assert_eq!(form.company_website, "https://acme.test");
    assert_eq!(form.get(TextField::CompanyWebsite), "https://acme.test");
    assert_eq!(form.company_name, "");
    assert!(!form.is_blank());
}

#[test]
fn set_reports_unchanged_value() {
    let mut form = FormState::default();
    form.set(TextField::Name, "Asha");
    assert!(!form.set(TextField::Name, "Asha"));
    assert!(form.set(TextField::Name, "Asha R"));
}

#[test]
fn reset_clears_every_field() {
    let mut form = FormState::default();
    for field in TextField::ALL {
        form.set(field, "x");
    }
    form.reset();
    assert!(form.is_blank());
}
