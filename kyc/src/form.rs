//! Text values collected by the wizard.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::field::TextField;

/// Current value of every [`TextField`]. Starts as empty strings.
///
/// Only the wizard holds a `FormState`; views read through [`FormState::get`]
/// and write through the wizard's setter so error clearing stays in one place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub company_name: String,
    pub company_website: String,
    pub company_email: String,
}

impl FormState {
    #[must_use]
    pub fn get(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Address => &self.address,
            TextField::CompanyName => &self.company_name,
            TextField::CompanyWebsite => &self.company_website,
            TextField::CompanyEmail => &self.company_email,
        }
    }

    /// Replace the value of `field`. Returns `true` if the value changed.
    pub fn set(&mut self, field: TextField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = self.slot_mut(field);
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// `true` when every field is the empty string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        TextField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
            TextField::Address => &mut self.address,
            TextField::CompanyName => &mut self.company_name,
            TextField::CompanyWebsite => &mut self.company_website,
            TextField::CompanyEmail => &mut self.company_email,
        }
    }
}
