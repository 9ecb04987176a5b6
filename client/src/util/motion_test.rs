use super::*;

#[test]
fn first_item_starts_immediately() {
    assert_eq!(stagger_delay_ms(0, ARTICLE_STAGGER_MS), 0);
}

#[test]
fn delays_grow_linearly() {
    assert_eq!(stagger_delay_ms(1, ARTICLE_STAGGER_MS), 100);
    assert_eq!(stagger_delay_ms(2, ARTICLE_STAGGER_MS), 200);
    assert_eq!(stagger_delay_ms(8, PORTFOLIO_STAGGER_MS), 400);
}

#[test]
fn huge_index_saturates() {
    assert_eq!(stagger_delay_ms(usize::MAX, PORTFOLIO_STAGGER_MS), u32::MAX);
}

#[test]
fn stagger_style_formats_css() {
    assert_eq!(stagger_style(3, PORTFOLIO_STAGGER_MS), "animation-delay: 150ms;");
}

#[test]
fn transition_duration_is_fixed() {
    assert_eq!(TRANSITION_MS, 300);
}
