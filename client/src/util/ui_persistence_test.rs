#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_json_is_none_without_a_browser() {
    assert_eq!(load_json::<String>("anything"), None);
}

#[test]
fn draft_helpers_are_callable_without_a_browser() {
    let draft = ContactDraft { name: "Ada".to_owned(), ..ContactDraft::default() };
    save_draft(&draft);
    save_draft(&ContactDraft::default());
    assert_eq!(load_draft(), None);
    clear_draft();
}

#[test]
fn remove_key_leaves_nothing_to_load() {
    remove_key(CONTACT_DRAFT_KEY);
    assert_eq!(load_json::<ContactDraft>(CONTACT_DRAFT_KEY), None);
    assert_eq!(load_draft(), None);
}
