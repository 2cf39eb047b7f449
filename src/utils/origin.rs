//! Externally visible origin extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Determines the origin (`scheme://host[:port]`) used to build short URLs.
///
/// Resolution order:
/// 1. `base_url` from configuration, if set (trailing `/` trimmed)
/// 2. `X-Forwarded-Proto` / `X-Forwarded-Host`, only when `behind_proxy`
/// 3. `http://` + the `Host` header
///
/// Only the first value of a comma-separated forwarded header is used.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base URL is configured and the
/// `Host` header is missing or not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8000".parse().unwrap());
///
/// let origin = request_origin(&headers, None, false).unwrap();
/// assert_eq!(origin, "http://sho.rt:8000");
/// ```
pub fn request_origin(
    headers: &HeaderMap,
    base_url: Option<&str>,
    behind_proxy: bool,
) -> Result<String, AppError> {
    if let Some(base) = base_url {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let forwarded = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let scheme = behind_proxy
        .then(|| forwarded(X_FORWARDED_PROTO))
        .flatten()
        .unwrap_or("http");

    let host = match behind_proxy.then(|| forwarded(X_FORWARDED_HOST)).flatten() {
        Some(host) => host,
        None => headers
            .get(header::HOST)
            .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?,
    };

    Ok(format!("{scheme}://{host}"))
}
