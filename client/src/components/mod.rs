//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chrome components (banner, navigation, sidebar, footer) surround the
//! transition container, which mounts exactly one of the four tab views.

pub mod about_tab;
pub mod articles_tab;
pub mod header_banner;
pub mod home_tab;
pub mod icon;
pub mod nav_bar;
pub mod portfolio_tab;
pub mod sidebar;
pub mod site_footer;
pub mod tab_transition;
