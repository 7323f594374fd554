//! Client-only UI state. Domain state lives in `kyc::Wizard`.

pub mod notice;
