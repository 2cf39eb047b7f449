//! Utility functions for identifier generation, URL processing, and request handling.
//!
//! - [`id_generator`] - Short identifier generation and custom ID validation
//! - [`url_normalizer`] - Scheme normalization and URL validation
//! - [`origin`] - Externally visible origin extraction from HTTP headers
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod id_generator;
pub mod origin;
pub mod url_normalizer;
