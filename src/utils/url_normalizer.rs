//! URL scheme normalization and validation.
//!
//! Submitted URLs are stored with an explicit `http://` or `https://` scheme.
//! Bare hosts such as `example.com` are assumed to be HTTPS.

use url::Url;

/// Maximum accepted length of a submitted URL.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Original URL is required")]
    Empty,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("URL contains control characters")]
    ControlCharacter,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Ensures `url` carries an explicit HTTP(S) scheme.
///
/// Returns the input unchanged if it starts with `http://` or `https://`
/// (case-insensitive), otherwise prefixes `https://`. Never fails; an empty
/// input becomes `"https://"`, so callers reject empty input first.
///
/// # Examples
///
/// ```
/// use shortpath::utils::url_normalizer::ensure_http_scheme;
///
/// assert_eq!(ensure_http_scheme("example.com"), "https://example.com");
/// assert_eq!(ensure_http_scheme("HTTP://example.com"), "HTTP://example.com");
/// ```
pub fn ensure_http_scheme(url: &str) -> String {
    if has_http_scheme(url) {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Trims, normalizes and validates a submitted URL.
///
/// The returned string is what gets persisted: the trimmed input with a
/// scheme prefixed when absent. Validation only checks that the result is an
/// absolute URL with a host; the stored text is not otherwise rewritten.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for empty or whitespace-only input
/// - [`UrlValidationError::TooLong`] above [`MAX_URL_LENGTH`] characters
/// - [`UrlValidationError::ControlCharacter`] for tabs, line breaks and other
///   ASCII control characters, which the parser would silently drop but the
///   stored text would keep
/// - [`UrlValidationError::InvalidFormat`] if the normalized URL does not parse
/// - [`UrlValidationError::MissingHost`] if it parses without a host
pub fn prepare_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if trimmed.chars().count() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    if trimmed.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::ControlCharacter);
    }

    let normalized = ensure_http_scheme(trimmed);

    let parsed =
        Url::parse(&normalized).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(normalized),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_https_when_scheme_missing() {
        assert_eq!(ensure_http_scheme("example.com"), "https://example.com");
        assert_eq!(
            ensure_http_scheme("example.com/path?q=1"),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn test_keeps_existing_http_scheme() {
        assert_eq!(ensure_http_scheme("http://example.com"), "http://example.com");
        assert_eq!(ensure_http_scheme("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_scheme_check_is_case_insensitive() {
        assert_eq!(ensure_http_scheme("HTTPS://EXAMPLE.COM"), "HTTPS://EXAMPLE.COM");
        assert_eq!(ensure_http_scheme("Http://example.com"), "Http://example.com");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for input in [
            "example.com",
            "http://a.com",
            "HTTPS://b.com",
            "ftp://c.com",
            "",
        ] {
            let once = ensure_http_scheme(input);
            assert_eq!(ensure_http_scheme(&once), once);
        }
    }

    #[test]
    fn test_other_schemes_are_prefixed() {
        assert_eq!(ensure_http_scheme("ftp://host/file"), "https://ftp://host/file");
    }

    #[test]
    fn test_empty_input_normalizes_to_bare_scheme() {
        assert_eq!(ensure_http_scheme(""), "https://");
    }

    #[test]
    fn test_non_ascii_input_does_not_panic() {
        assert_eq!(ensure_http_scheme("héllo.com"), "https://héllo.com");
        assert_eq!(ensure_http_scheme("ü"), "https://ü");
    }

    #[test]
    fn test_prepare_trims_and_normalizes() {
        assert_eq!(
            prepare_url("  example.com/path  ").unwrap(),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_prepare_preserves_schemed_input_verbatim() {
        assert_eq!(
            prepare_url("HTTP://Example.com/Path#frag").unwrap(),
            "HTTP://Example.com/Path#frag"
        );
    }

    #[test]
    fn test_prepare_rejects_empty() {
        assert!(matches!(prepare_url(""), Err(UrlValidationError::Empty)));
        assert!(matches!(prepare_url("   "), Err(UrlValidationError::Empty)));
    }

    #[test]
    fn test_prepare_rejects_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(prepare_url(&url), Err(UrlValidationError::TooLong)));
    }

    #[test]
    fn test_prepare_length_counts_characters() {
        let url = format!("https://example.com/{}", "é".repeat(1100));
        assert!(url.len() > MAX_URL_LENGTH);
        assert_eq!(prepare_url(&url).unwrap(), url);
    }

    #[test]
    fn test_prepare_rejects_control_characters() {
        for input in ["example.com/a\nb", "example.com/a\rb", "exam\tple.com", "a.com/\u{7f}"] {
            assert!(matches!(
                prepare_url(input),
                Err(UrlValidationError::ControlCharacter)
            ));
        }
    }

    #[test]
    fn test_prepare_rejects_unparseable() {
        assert!(matches!(
            prepare_url("exa mple.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_prepare_accepts_ip_and_port() {
        assert_eq!(
            prepare_url("192.168.1.1:8080/api").unwrap(),
            "https://192.168.1.1:8080/api"
        );
    }
}
