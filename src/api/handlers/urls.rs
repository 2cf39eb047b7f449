//! Handler for listing stored mappings.

use axum::{Json, extract::State};

use crate::api::dto::url_list::UrlListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored mapping, most recent first.
///
/// # Endpoint
///
/// `GET /api/url/allURLs`
///
/// # Response
///
/// ```json
/// {
///   "urls": [
///     {
///       "shortid": "abc123",
///       "originalUrl": "https://example.com",
///       "createdAt": "2025-01-01T12:00:00Z"
///     }
///   ]
/// }
/// ```
///
/// No pagination: the whole collection is returned on every call.
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<UrlListResponse>, AppError> {
    let mappings = state.url_service.list_all().await?;
    Ok(Json(UrlListResponse::from(mappings)))
}
