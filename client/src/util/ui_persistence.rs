//! Browser localStorage helpers for transient form draft persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the contact
//! form can persist its draft without repeating web-sys glue. On the server
//! every call is a no-op.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::contact::ContactDraft;

pub const CONTACT_DRAFT_KEY: &str = "portfolio_contact_draft";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::debug!("localStorage rejected {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove_key(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if storage.remove_item(key).is_err() {
                log::debug!("localStorage refused to remove {key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Restore the contact draft, if one was saved and still parses.
pub fn load_draft() -> Option<ContactDraft> {
    load_json::<ContactDraft>(CONTACT_DRAFT_KEY).filter(|draft| !draft.is_empty())
}

/// Persist the contact draft; an empty draft removes the stored entry.
pub fn save_draft(draft: &ContactDraft) {
    if draft.is_empty() {
        remove_key(CONTACT_DRAFT_KEY);
    } else {
        save_json(CONTACT_DRAFT_KEY, draft);
    }
}

pub fn clear_draft() {
    remove_key(CONTACT_DRAFT_KEY);
}
