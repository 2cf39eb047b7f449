//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short ID to its original URL.
///
/// # Endpoint
///
/// `GET /{shortid}`
///
/// Every request is a single store lookup; nothing is cached and nothing is
/// recorded.
///
/// # Errors
///
/// Returns 404 Not Found if the short ID doesn't exist.
/// Returns 500 Internal Server Error on store failures.
pub async fn redirect_handler(
    Path(shortid): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = state.url_service.resolve(&shortid).await?;

    let location = HeaderValue::try_from(original_url).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "shortid": shortid, "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
