//! Animation timing shared by the transition layer and staggered lists.
//!
//! Keyframes live in `style/main.css`; this module only decides durations and
//! per-item delays so markup and timers agree.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Length of both the exit and the enter animation of the tab content.
pub const TRANSITION_MS: u32 = 300;

/// Delay step between consecutive article cards.
pub const ARTICLE_STAGGER_MS: u32 = 100;

/// Delay step between consecutive portfolio tiles.
pub const PORTFOLIO_STAGGER_MS: u32 = 50;

/// Delay before the item at `index` starts its enter animation.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(step_ms))
}

/// Inline style carrying the delay for the item at `index`.
pub fn stagger_style(index: usize, step_ms: u32) -> String {
    format!("animation-delay: {}ms;", stagger_delay_ms(index, step_ms))
}
