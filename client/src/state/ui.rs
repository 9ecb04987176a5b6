//! Page chrome state: which top-level tab is selected.
//!
//! DESIGN
//! ======
//! The selected tab is the only mutable value on the page. It lives in an
//! `RwSignal<UiState>` provided via context by the root view and is written
//! exclusively by the navigation bar.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level page views, in navigation order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Home,
    About,
    Articles,
    Photos,
}

impl Tab {
    /// Every tab in the order the navigation bar shows them.
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::About, Tab::Articles, Tab::Photos];

    /// Label rendered on the navigation button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "首页",
            Self::About => "关于我",
            Self::Articles => "我的经历",
            Self::Photos => "我的照片",
        }
    }

    /// Stable DOM-friendly key, used for panel ids and `data-tab` attributes.
    pub fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Articles => "articles",
            Self::Photos => "photos",
        }
    }
}

/// UI state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
}

impl UiState {
    /// Select `tab`. Returns `false` when it was already active.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }
}
