use std::sync::Arc;

use crate::application::services::UrlService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    /// Public origin for short URLs. When `None`, the request's Host is used.
    pub base_url: Option<String>,
    /// Trust `X-Forwarded-*` headers when deriving the origin.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, base_url: Option<String>, behind_proxy: bool) -> Self {
        Self {
            url_service,
            base_url,
            behind_proxy,
        }
    }
}
