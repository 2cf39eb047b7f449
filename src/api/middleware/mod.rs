//! HTTP middleware for request processing.
//!
//! Provides observability and cross-origin access layers.

pub mod cors;
pub mod tracing;
