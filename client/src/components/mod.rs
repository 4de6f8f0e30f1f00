//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and layout chrome. Shared state comes from
//! Leptos context; section copy comes from `crate::content`.

pub mod about;
pub mod contact_form;
pub mod custom_cursor;
pub mod cyber_grid;
pub mod footer;
pub mod hero;
pub mod holographic_stats;
pub mod homelab;
pub mod navbar;
pub mod particle_background;
pub mod project_card;
pub mod reveal;
pub mod section_heading;
pub mod timeline;
pub mod toaster;
