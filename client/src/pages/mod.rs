//! Route-level page components.

pub mod about;
pub mod contact;
pub mod home;
pub mod homelab;
pub mod not_found;
pub mod project_detail;
pub mod projects;
