//! In-memory implementation of the URL mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(Debug, Clone)]
struct StoredMapping {
    mapping: UrlMapping,
    /// Insertion order, breaks ties between equal timestamps.
    seq: u64,
}

/// Process-local mapping store backed by a sharded concurrent map.
///
/// Inserts go through the map's entry API, so two concurrent creates for the
/// same identifier cannot both succeed. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    storage: DashMap<String, StoredMapping>,
    next_seq: AtomicU64,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        match self.storage.entry(new_mapping.identifier.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Short ID already in use",
                json!({ "shortid": new_mapping.identifier }),
            )),
            Entry::Vacant(slot) => {
                let mapping = UrlMapping::new(
                    new_mapping.identifier,
                    new_mapping.original_url,
                    Utc::now(),
                );
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(StoredMapping {
                    mapping: mapping.clone(),
                    seq,
                });
                Ok(mapping)
            }
        }
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self
            .storage
            .get(identifier)
            .map(|entry| entry.mapping.clone()))
    }

    async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        let mut stored: Vec<StoredMapping> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        stored.sort_by(|a, b| {
            b.mapping
                .created_at
                .cmp(&a.mapping.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        Ok(stored.into_iter().map(|s| s.mapping).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.storage.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_mapping(identifier: &str, url: &str) -> NewUrlMapping {
        NewUrlMapping {
            identifier: identifier.to_string(),
            original_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryUrlRepository::new();

        let created = repo
            .create(new_mapping("abc123", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(created.identifier, "abc123");

        let found = repo.find_by_identifier("abc123").await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_is_case_sensitive() {
        let repo = MemoryUrlRepository::new();
        repo.create(new_mapping("AbC", "https://example.com"))
            .await
            .unwrap();

        assert!(repo.find_by_identifier("abc").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_identifier_conflicts_without_overwrite() {
        let repo = MemoryUrlRepository::new();
        repo.create(new_mapping("x", "https://a.com")).await.unwrap();

        let result = repo.create(new_mapping("x", "https://b.com")).await;
        assert!(matches!(result, Err(AppError::Conflict { .. })));

        let stored = repo.find_by_identifier("x").await.unwrap().unwrap();
        assert_eq!(stored.original_url, "https://a.com");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_all_most_recent_first() {
        let repo = MemoryUrlRepository::new();
        for id in ["first", "second", "third"] {
            repo.create(new_mapping(id, "https://example.com"))
                .await
                .unwrap();
        }

        let ids: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.identifier)
            .collect();

        assert_eq!(ids, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let repo = MemoryUrlRepository::new();
        assert!(repo.list_all().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
