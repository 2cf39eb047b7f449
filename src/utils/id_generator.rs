//! Short identifier generation and custom identifier validation.
//!
//! Generated identifiers are random, URL-safe and carry 72 bits of entropy.
//! They are *not* guaranteed unique on their own; the store's unique
//! constraint decides, and callers regenerate on conflict.

use crate::error::AppError;
use base64::Engine as _;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Maximum length of a caller-supplied identifier.
pub const MAX_CUSTOM_ID_LENGTH: usize = 64;

/// Path segments that cannot be used as identifiers because they are routes.
pub const RESERVED_IDS: &[&str] = &["api", "health"];

static CUSTOM_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("custom id regex is valid"));

/// Source of fresh short identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Cryptographically random identifier generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        generate_id()
    }
}

/// Generates a random short identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character identifier.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Validates a caller-supplied identifier.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route segment
///
/// Identifiers are case-sensitive and used verbatim.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_id(id: &str) -> Result<(), AppError> {
    if id.is_empty() || id.len() > MAX_CUSTOM_ID_LENGTH {
        return Err(AppError::bad_request(
            format!("Custom short ID must be 1-{MAX_CUSTOM_ID_LENGTH} characters"),
            json!({ "provided_length": id.len() }),
        ));
    }

    if !CUSTOM_ID_REGEX.is_match(id) {
        return Err(AppError::bad_request(
            "Custom short ID can only contain letters, digits, hyphens and underscores",
            json!({ "shortid": id }),
        ));
    }

    if RESERVED_IDS.contains(&id) {
        return Err(AppError::bad_request(
            "This short ID is reserved",
            json!({ "shortid": id }),
        ));
    }

    Ok(())
}
