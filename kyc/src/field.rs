//! Field identifiers and the typed error bag.
//!
//! DESIGN
//! ======
//! Validation errors are keyed by a closed enumeration rather than by string
//! names, so a typo in a key is a compile error and every key can be matched
//! exhaustively. Wire names (`as_str`) are kept in camelCase to match the
//! JSON contract and the DOM `id` attributes used by the client.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use std::collections::BTreeMap;

// =============================================================================
// TEXT FIELDS
// =============================================================================

/// Free-text fields collected by the personal and organization steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextField {
    Name,
    Email,
    Phone,
    Address,
    CompanyName,
    CompanyWebsite,
    CompanyEmail,
}

impl TextField {
    /// Every text field, in form order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::CompanyName,
        Self::CompanyWebsite,
        Self::CompanyEmail,
    ];

    /// Fields rendered on the personal information step.
    pub const PERSONAL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Address];

    /// Fields rendered on the organization step.
    pub const ORGANIZATION: [Self; 3] = [Self::CompanyName, Self::CompanyWebsite, Self::CompanyEmail];

    /// Wire / DOM name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::CompanyName => "companyName",
            Self::CompanyWebsite => "companyWebsite",
            Self::CompanyEmail => "companyEmail",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Address => "Address",
            Self::CompanyName => "Company Name",
            Self::CompanyWebsite => "Company Website",
            Self::CompanyEmail => "Company Email",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your full name",
            Self::Email => "Enter your email address",
            Self::Phone => "Enter your phone number",
            Self::Address => "Enter your complete address",
            Self::CompanyName => "Enter company name",
            Self::CompanyWebsite => "https://example.com",
            Self::CompanyEmail => "company@example.com",
        }
    }

    /// HTML input type used to render the field.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email | Self::CompanyEmail => "email",
            Self::Phone => "tel",
            Self::CompanyWebsite => "url",
            Self::Name | Self::Address | Self::CompanyName => "text",
        }
    }

    /// Whether the field is rendered as a multi-line text area.
    #[must_use]
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Address)
    }
}

// =============================================================================
// ERROR KEYS
// =============================================================================

/// Anything a validation error can be attached to.
///
/// Group keys (`IdDocument`, `PhotoDocument`) attach to a mutual-exclusion
/// group as a whole. Per-slot problems live on the `FileSlot` itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    Text(TextField),
    IdDocument,
    PhotoDocument,
    Solutions,
}

impl ErrorKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text(field) => field.as_str(),
            Self::IdDocument => "idDocument",
            Self::PhotoDocument => "photoDocument",
            Self::Solutions => "solutions",
        }
    }
}

impl From<TextField> for ErrorKey {
    fn from(field: TextField) -> Self {
        Self::Text(field)
    }
}

// =============================================================================
// ERROR BAG
// =============================================================================

/// Mapping from error key to message. An absent key means "valid".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<ErrorKey, String>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `message` to `key`, replacing any previous message.
    pub fn insert(&mut self, key: impl Into<ErrorKey>, message: impl Into<String>) {
        self.entries.insert(key.into(), message.into());
    }

    /// Remove the message for `key`. Returns `true` if one was present.
    pub fn clear(&mut self, key: impl Into<ErrorKey>) -> bool {
        self.entries.remove(&key.into()).is_some()
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn get(&self, key: impl Into<ErrorKey>) -> Option<&str> {
        self.entries.get(&key.into()).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: impl Into<ErrorKey>) -> bool {
        self.entries.contains_key(&key.into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Merge `other` into `self`; keys in `other` win.
    pub fn extend(&mut self, other: FieldErrors) {
        self.entries.extend(other.entries);
    }
}
