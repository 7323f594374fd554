//! Network access. The only outbound call is the relay submission.

pub mod api;
