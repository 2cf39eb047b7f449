//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Store for URL mappings.
///
/// The store is the final arbiter of identifier uniqueness: [`Self::create`]
/// must reject a duplicate identifier even when a caller's earlier lookup
/// found it free.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping, stamping `created_at` with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the identifier already exists.
    /// Returns [`AppError::Internal`] on store faults or timeouts.
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by exact identifier match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store faults or timeouts.
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Returns every mapping, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store faults or timeouts.
    async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store faults or timeouts.
    async fn count(&self) -> Result<i64, AppError>;
}
