//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                  - Greeting
//! - `GET  /health`            - Health check
//! - `POST /api/url/shorten`   - Create a short URL
//! - `GET  /api/url/allURLs`   - List stored mappings
//! - `GET  /{shortid}`         - Short link redirect
//! - anything else             - `404 {"error": "Route not found"}`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Open to any origin
//!
//! Trailing-slash normalization wraps the whole router in [`crate::server`].

use crate::api;
use crate::api::handlers::{health_handler, index_handler, not_found_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/{shortid}", get(redirect_handler))
        .nest("/api/url", api::routes::url_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
