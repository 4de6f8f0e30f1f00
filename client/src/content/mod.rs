//! Static site content.
//!
//! Everything the pages render is compiled in as `&'static` data: there is no
//! backend and nothing here is mutated at runtime.

pub mod profile;
pub mod projects;
pub mod site;
pub mod timeline;
