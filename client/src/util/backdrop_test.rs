use super::*;

#[test]
fn identical_viewport_is_unchanged() {
    assert!(!viewport_changed((800.0, 600.0, 2.0), (800.0, 600.0, 2.0)));
}

#[test]
fn subpixel_jitter_is_ignored() {
    assert!(!viewport_changed((800.0, 600.0, 1.0), (800.3, 599.8, 1.0)));
}

#[test]
fn size_or_dpr_change_is_detected() {
    assert!(viewport_changed((800.0, 600.0, 1.0), (1024.0, 600.0, 1.0)));
    assert!(viewport_changed((800.0, 600.0, 1.0), (800.0, 700.0, 1.0)));
    assert!(viewport_changed((800.0, 600.0, 1.0), (800.0, 600.0, 2.0)));
}
