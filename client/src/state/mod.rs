//! Client-side view state.
//!
//! DESIGN
//! ======
//! Each interactive behaviour is a small plain-Rust model so it can be tested
//! natively. Components hold these in `RwSignal`s and keep browser glue out.

pub mod contact;
pub mod cursor;
pub mod nav;
pub mod reveal;
pub mod toast;
