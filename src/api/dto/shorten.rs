//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// ```json
/// { "originalUrl": "example.com", "URLID": "my-link" }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to shorten. A missing scheme is treated as `https://`.
    #[validate(
        required(message = "Original URL is required"),
        length(max = 2048, message = "URL exceeds 2048 characters")
    )]
    pub original_url: Option<String>,

    /// Optional custom short ID. Empty means "generate one".
    #[serde(rename = "URLID")]
    #[validate(length(max = 64, message = "Custom short ID must be 1-64 characters"))]
    pub url_id: Option<String>,
}

/// Response for a created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub message: String,
    pub short_url: String,
}

impl ShortenResponse {
    pub fn created(short_url: String) -> Self {
        Self {
            message: "Short URL created successfully".to_string(),
            short_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_wire_names() {
        let request: ShortenRequest =
            serde_json::from_value(json!({ "originalUrl": "a.com", "URLID": "x" })).unwrap();

        assert_eq!(request.original_url.as_deref(), Some("a.com"));
        assert_eq!(request.url_id.as_deref(), Some("x"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_original_url_fails_validation() {
        let request: ShortenRequest = serde_json::from_value(json!({ "URLID": "x" })).unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("original_url"));
    }

    #[test]
    fn test_overlong_custom_id_fails_validation() {
        let request: ShortenRequest = serde_json::from_value(json!({
            "originalUrl": "a.com",
            "URLID": "a".repeat(65)
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let value =
            serde_json::to_value(ShortenResponse::created("http://sho.rt/x".into())).unwrap();
        assert_eq!(value["shortUrl"], "http://sho.rt/x");
        assert_eq!(value["message"], "Short URL created successfully");
    }
}
