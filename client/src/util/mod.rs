//! Browser plumbing helpers.

pub mod camera;
pub mod files;
