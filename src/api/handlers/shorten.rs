//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::origin::request_origin;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /api/url/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "example.com/some/long/path",
///   "URLID": "my-link"  // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "message": "Short URL created successfully",
///   "shortUrl": "https://sho.rt/my-link"
/// }
/// ```
///
/// The short URL origin is resolved before anything is stored, so a request
/// that cannot produce a short URL leaves the store untouched.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, the URL is missing or
/// invalid, or the custom ID is invalid or already in use.
/// Returns 500 Internal Server Error on store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let origin = request_origin(&headers, state.base_url.as_deref(), state.behind_proxy)?;

    let link = state
        .url_service
        .shorten(
            &origin,
            payload.original_url.as_deref().unwrap_or_default(),
            payload.url_id.as_deref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse::created(link.short_url)),
    ))
}
