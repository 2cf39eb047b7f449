//! Shortening, redirect lookup and listing of URL mappings.

use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::id_generator::{IdGenerator, validate_custom_id};
use crate::utils::url_normalizer::{UrlValidationError, prepare_url};
use serde_json::json;

/// Attempts at inserting a generated identifier before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Result of a successful shortening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub identifier: String,
    pub short_url: String,
}

/// Service for creating and resolving short links.
///
/// Holds no state of its own beyond the store and generator handles: every
/// read and write goes straight to the repository.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    generator: Arc<dyn IdGenerator>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>, generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Creates a new mapping and returns its short URL under `base_url`.
    ///
    /// # Identifier Selection
    ///
    /// - `custom_id` (blank counts as absent) is validated and used verbatim,
    ///   surrounding whitespace included. A lookup fails fast if it is taken;
    ///   the store's unique constraint remains the final arbiter for
    ///   concurrent creators.
    /// - Otherwise a random identifier is generated and inserted, regenerating
    ///   on collision up to 5 times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or malformed, or
    /// the custom identifier is invalid.
    ///
    /// Returns [`AppError::Conflict`] if the custom identifier is already taken.
    ///
    /// Returns [`AppError::Internal`] on store faults or when no free
    /// identifier could be generated.
    pub async fn shorten(
        &self,
        base_url: &str,
        original_url: &str,
        custom_id: Option<&str>,
    ) -> Result<ShortLink, AppError> {
        let original_url = prepare_url(original_url).map_err(|e| match e {
            UrlValidationError::Empty | UrlValidationError::TooLong => {
                AppError::bad_request(e.to_string(), json!({}))
            }
            _ => AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() })),
        })?;

        let custom_id = custom_id.filter(|id| !id.trim().is_empty());

        let mapping = match custom_id {
            Some(id) => self.create_with_custom_id(id, original_url).await?,
            None => self.create_with_generated_id(original_url).await?,
        };

        tracing::info!(
            shortid = %mapping.identifier,
            original_url = %mapping.original_url,
            "Short URL created"
        );

        Ok(ShortLink {
            short_url: short_url(base_url, &mapping.identifier),
            identifier: mapping.identifier,
        })
    }

    /// Returns the original URL for `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists.
    /// Returns [`AppError::Internal`] on store faults.
    pub async fn resolve(&self, identifier: &str) -> Result<String, AppError> {
        match self.repository.find_by_identifier(identifier).await? {
            Some(mapping) => Ok(mapping.original_url),
            None => {
                tracing::debug!(shortid = identifier, "Short ID not found");
                Err(AppError::not_found(
                    "URL not found",
                    json!({ "shortid": identifier }),
                ))
            }
        }
    }

    /// Returns every mapping, most recent first.
    pub async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        self.repository.list_all().await
    }

    /// Returns the number of stored mappings.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    async fn create_with_custom_id(
        &self,
        id: &str,
        original_url: String,
    ) -> Result<UrlMapping, AppError> {
        validate_custom_id(id)?;

        if self.repository.find_by_identifier(id).await?.is_some() {
            tracing::debug!(shortid = id, "Custom short ID already in use");
            return Err(custom_id_taken(id));
        }

        let new_mapping = NewUrlMapping {
            identifier: id.to_string(),
            original_url,
        };

        match self.repository.create(new_mapping).await {
            Err(AppError::Conflict { .. }) => {
                tracing::debug!(shortid = id, "Custom short ID taken by a concurrent request");
                Err(custom_id_taken(id))
            }
            other => other,
        }
    }

    async fn create_with_generated_id(&self, original_url: String) -> Result<UrlMapping, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let new_mapping = NewUrlMapping {
                identifier: self.generator.generate(),
                original_url: original_url.clone(),
            };

            match self.repository.create(new_mapping).await {
                Err(AppError::Conflict { details, .. }) => {
                    tracing::warn!(attempt, %details, "Generated short ID collided, retrying");
                }
                other => return other,
            }
        }

        Err(AppError::internal(
            "Failed to generate unique identifier",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}

/// Builds the public short URL for `identifier` under `base_url`.
pub fn short_url(base_url: &str, identifier: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), identifier)
}

fn custom_id_taken(id: &str) -> AppError {
    AppError::conflict("Custom short ID already in use", json!({ "shortid": id }))
}
