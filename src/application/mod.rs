//! Application layer services implementing business logic.
//!
//! Services orchestrate validation, identifier generation and store calls.
//! They consume the repository trait and give HTTP handlers and the admin
//! CLI one shared API.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Shortening, redirect lookup and listing
pub mod services;
