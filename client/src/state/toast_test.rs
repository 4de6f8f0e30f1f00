use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "One", "");
    let b = state.push(ToastKind::Success, "Two", "second");
    assert!(b > a);
    assert_eq!(state.toasts().len(), 2);
    assert_eq!(state.toasts()[1].description, "second");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "One", "");
    let b = state.push(ToastKind::Info, "Two", "");
    assert!(state.dismiss(a));
    assert_eq!(state.toasts().iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn dismiss_twice_reports_missing() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Info, "One", "");
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
    assert!(state.is_empty());
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "One", "");
    state.dismiss(a);
    let b = state.push(ToastKind::Info, "Two", "");
    assert_ne!(a, b);
}

#[test]
fn kind_classes_are_distinct() {
    assert_ne!(ToastKind::Info.class(), ToastKind::Success.class());
    assert_eq!(ToastKind::default(), ToastKind::Info);
}
