#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn starts_off_screen_and_visible() {
    let state = CursorState::default();
    assert_eq!((state.x, state.y), (-100.0, -100.0));
    assert_eq!(state.style().opacity, 1.0);
}

#[test]
fn idle_cursor_uses_base_sizes() {
    let style = CursorState::default().style();
    assert_eq!(style.dot_size_px, 6.0);
    assert_eq!(style.outline_scale, 1.0);
    assert_eq!(style.outline_fill, "transparent");
}

#[test]
fn link_hover_grows_dot_and_outline() {
    let state = CursorState { link_hovered: true, ..CursorState::default() };
    let style = state.style();
    assert_eq!(style.dot_size_px, 8.0);
    assert_eq!(style.outline_scale, 1.5);
    assert_eq!(style.outline_fill, "rgba(155, 135, 245, 0.1)");
}

#[test]
fn click_wins_over_link_hover() {
    let state = CursorState { clicked: true, link_hovered: true, ..CursorState::default() };
    assert_eq!(state.dot_size_px(), 6.0);
    assert_eq!(state.outline_scale(), 0.8);
}

#[test]
fn hidden_cursor_is_transparent() {
    let state = CursorState { hidden: true, ..CursorState::default() };
    assert_eq!(state.style().opacity, 0.0);
}

#[test]
fn transforms_follow_pointer() {
    let mut state = CursorState::default();
    state.move_to(12.0, 34.5);
    let style = state.style();
    assert_eq!(style.dot_transform(), "translate(calc(12px - 50%), calc(34.5px - 50%))");
    assert_eq!(style.outline_transform(), "translate(calc(12px - 50%), calc(34.5px - 50%)) scale(1)");
}
