//! API route configuration.

use crate::api::handlers::{list_urls_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// URL management routes, mounted under `/api/url`.
///
/// # Endpoints
///
/// - `POST /shorten`  - Create a short URL
/// - `GET  /allURLs`  - List every stored mapping
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/allURLs", get(list_urls_handler))
}
