use super::*;

#[test]
fn new_state_enters_initial_tab() {
    let state = TransitionState::new(Tab::Home);
    assert_eq!(state.displayed(), Tab::Home);
    assert_eq!(state.target(), Tab::Home);
    assert_eq!(state.phase(), Phase::Entering);
}

#[test]
fn request_same_tab_is_noop() {
    let mut state = TransitionState::new(Tab::Home);
    let before = state.clone();
    assert_eq!(state.request(Tab::Home), None);
    assert_eq!(state, before);
}

#[test]
fn request_keeps_old_content_until_exit_completes() {
    let mut state = TransitionState::new(Tab::Home);
    let ticket = state.request(Tab::Photos).unwrap();

    assert_eq!(state.phase(), Phase::Exiting);
    assert_eq!(state.displayed(), Tab::Home);
    assert_eq!(state.target(), Tab::Photos);

    assert!(state.complete_exit(ticket));
    assert_eq!(state.phase(), Phase::Entering);
    assert_eq!(state.displayed(), Tab::Photos);
}

#[test]
fn every_tab_can_follow_every_other() {
    for from in Tab::ALL {
        for to in Tab::ALL {
            let mut state = TransitionState::new(from);
            if let Some(ticket) = state.request(to) {
                assert!(state.complete_exit(ticket));
            }
            assert_eq!(state.displayed(), to);
            assert_eq!(state.phase(), Phase::Entering);
        }
    }
}

#[test]
fn stale_ticket_is_ignored() {
    let mut state = TransitionState::new(Tab::Home);
    let first = state.request(Tab::Photos).unwrap();
    let second = state.request(Tab::About).unwrap();
    assert!(second > first);

    assert!(!state.complete_exit(first));
    assert_eq!(state.displayed(), Tab::Home);
    assert_eq!(state.phase(), Phase::Exiting);

    assert!(state.complete_exit(second));
    assert_eq!(state.displayed(), Tab::About);
}

#[test]
fn completing_twice_is_rejected() {
    let mut state = TransitionState::new(Tab::Home);
    let ticket = state.request(Tab::Articles).unwrap();
    assert!(state.complete_exit(ticket));
    assert!(!state.complete_exit(ticket));
    assert_eq!(state.displayed(), Tab::Articles);
}

#[test]
fn returning_to_mounted_tab_mid_exit_still_reenters() {
    let mut state = TransitionState::new(Tab::Home);
    state.request(Tab::Photos).unwrap();
    let back = state.request(Tab::Home).unwrap();
    assert_eq!(state.phase(), Phase::Exiting);
    assert!(state.complete_exit(back));
    assert_eq!(state.displayed(), Tab::Home);
    assert_eq!(state.phase(), Phase::Entering);
}

#[test]
fn phase_classes_differ() {
    assert_ne!(Phase::Entering.class(), Phase::Exiting.class());
    assert!(Phase::Entering.class().starts_with("tab-transition "));
}
