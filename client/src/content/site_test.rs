use super::*;

#[test]
fn nav_items_have_unique_paths() {
    for (i, a) in NAV_ITEMS.iter().enumerate() {
        for b in &NAV_ITEMS[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn home_is_only_active_at_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/projects", "/"));
}

#[test]
fn section_is_active_on_its_subroutes() {
    assert!(is_active("/projects", "/projects"));
    assert!(is_active("/projects/password-vault", "/projects"));
    assert!(!is_active("/projectsx", "/projects"));
    assert!(!is_active("/about", "/projects"));
}

#[test]
fn page_modes_differ() {
    assert_eq!(HOME_CONTACT_MODE, ContactMode::Mailto);
    assert_eq!(CONTACT_PAGE_MODE, ContactMode::Simulated);
}

#[test]
fn year_from_unix_days_known_dates() {
    assert_eq!(year_from_unix_days(0), 1970);
    assert_eq!(year_from_unix_days(-1), 1969);
    // 2000-02-29
    assert_eq!(year_from_unix_days(11_016), 2000);
    // 2023-12-31 and 2024-01-01
    assert_eq!(year_from_unix_days(19_722), 2023);
    assert_eq!(year_from_unix_days(19_723), 2024);
}

#[test]
fn current_year_is_plausible() {
    assert!(current_year() >= 2024);
}
