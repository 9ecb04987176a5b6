//! Enter/exit sequencing for the tab content area.
//!
//! DESIGN
//! ======
//! The transition runs in "wait" mode: the outgoing view finishes its exit
//! animation before the incoming view is mounted. Each request hands out a
//! ticket; the timer that ends an exit presents its ticket back and only the
//! newest one is honored, so a burst of clicks settles on the last tab.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use crate::state::ui::Tab;

/// Animation phase of the content currently mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Content is animating in (or has finished doing so).
    Entering,
    /// Content is animating out; a swap is pending.
    Exiting,
}

impl Phase {
    pub fn class(self) -> &'static str {
        match self {
            Self::Entering => "tab-transition tab-transition--enter",
            Self::Exiting => "tab-transition tab-transition--exit",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionState {
    displayed: Tab,
    target: Tab,
    phase: Phase,
    ticket: u64,
}

impl TransitionState {
    /// Start with `tab` mounted and playing its enter animation.
    pub fn new(tab: Tab) -> Self {
        Self { displayed: tab, target: tab, phase: Phase::Entering, ticket: 0 }
    }

    /// Tab whose content is mounted right now.
    pub fn displayed(&self) -> Tab {
        self.displayed
    }

    /// Tab the content area is converging to.
    pub fn target(&self) -> Tab {
        self.target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ask for `tab` to be shown.
    ///
    /// Returns the ticket the caller must hand to [`Self::complete_exit`]
    /// once the exit animation has run, or `None` when `tab` is already the
    /// target and nothing needs to happen.
    pub fn request(&mut self, tab: Tab) -> Option<u64> {
        if tab == self.target {
            return None;
        }
        self.target = tab;
        self.phase = Phase::Exiting;
        self.ticket += 1;
        Some(self.ticket)
    }

    /// Finish the exit started by `ticket` and mount the target.
    ///
    /// Returns `false` for stale tickets, which leave the state untouched.
    pub fn complete_exit(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || self.phase != Phase::Exiting {
            return false;
        }
        self.displayed = self.target;
        self.phase = Phase::Entering;
        true
    }
}
