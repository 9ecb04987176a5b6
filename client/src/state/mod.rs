//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` holds the selected tab, the only value the user can change.
//! `transition` derives what the content area shows while it animates
//! between tabs.

pub mod transition;
pub mod ui;
