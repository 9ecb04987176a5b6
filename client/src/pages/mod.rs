//! Top-level pages.

pub mod profile;
