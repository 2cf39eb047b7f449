//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into [`crate::application::services::UrlService`]
//! calls and formats responses according to the public API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and CORS layers
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
