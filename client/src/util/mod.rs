//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod backdrop;
pub mod browser;
pub mod markdown;
pub mod motion;
pub mod tilt;
pub mod typewriter;
pub mod ui_persistence;
