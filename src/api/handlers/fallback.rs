//! Root greeting and catch-all handlers.

use serde_json::Value;

use crate::error::AppError;

/// `GET /`
pub async fn index_handler() -> &'static str {
    "Welcome to the Short Path API"
}

/// Responds to any unmatched route with `404 {"error": "Route not found"}`.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Route not found", Value::Null)
}
