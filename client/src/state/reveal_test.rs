use super::*;

#[test]
fn starts_hidden() {
    assert!(!RevealState::default().is_active());
}

#[test]
fn non_intersecting_observations_do_nothing() {
    let mut state = RevealState::default();
    assert!(!state.observe(false));
    assert!(!state.is_active());
}

#[test]
fn activates_at_most_once() {
    let mut state = RevealState::default();
    assert!(state.observe(true));
    assert!(!state.observe(true));
    assert!(!state.observe(false));
    assert!(state.is_active());
    let transitions = [true, false, true, true].iter().filter(|&&seen| state.observe(seen)).count();
    assert_eq!(transitions, 0);
}
