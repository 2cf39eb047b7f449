//! Repository trait definitions for the domain layer.
//!
//! - [`UrlRepository`] - Mapping store operations
//!
//! Implementations live in `crate::infrastructure::persistence`; a mock is
//! generated via `mockall` for unit tests.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
