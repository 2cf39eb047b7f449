//! DTOs for the listing endpoint.

use crate::domain::entities::UrlMapping;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// All stored mappings, most recent first.
#[derive(Debug, Serialize)]
pub struct UrlListResponse {
    pub urls: Vec<UrlListItem>,
}

/// One stored mapping as exposed to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlListItem {
    pub shortid: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<UrlMapping> for UrlListItem {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            shortid: mapping.identifier,
            original_url: mapping.original_url,
            created_at: mapping.created_at,
        }
    }
}

impl From<Vec<UrlMapping>> for UrlListResponse {
    fn from(mappings: Vec<UrlMapping>) -> Self {
        Self {
            urls: mappings.into_iter().map(UrlListItem::from).collect(),
        }
    }
}
