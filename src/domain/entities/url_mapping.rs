//! URL mapping entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored mapping from a short identifier to its original URL.
///
/// `original_url` always carries an explicit `http://` or `https://` scheme.
/// Records are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UrlMapping {
    pub identifier: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(identifier: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            identifier,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// `created_at` is assigned by the store at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub identifier: String,
    pub original_url: String,
}
