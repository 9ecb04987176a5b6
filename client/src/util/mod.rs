//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps URL building and animation timing out of the components so they can
//! be unit tested without a browser.

pub mod motion;
pub mod picsum;
