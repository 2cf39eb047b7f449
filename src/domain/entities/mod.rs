//! Core domain entities.
//!
//! - [`UrlMapping`] - A persisted identifier → URL mapping
//! - [`NewUrlMapping`] - Input for creating a mapping
//!
//! Mappings are created once and never updated, so there is no patch type.

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
