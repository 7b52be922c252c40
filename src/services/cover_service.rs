//! Cover URL resolution with a per-state cache
//!
//! Google Books thumbnail first, OpenLibrary covers endpoint as fallback.
//! The cache lives on `AppState`, not in a process-wide global, so two states
//! (e.g. app + previews) never share entries.

use std::sync::Arc;

use dashmap::DashMap;

use crate::domain::MetadataProvider;
use crate::integrations::OpenLibraryCovers;
use crate::models::Book;

#[derive(Clone)]
pub struct CoverService {
    provider: Arc<dyn MetadataProvider>,
    fallback: OpenLibraryCovers,
    cache: Arc<DashMap<String, String>>,
}

impl CoverService {
    pub fn new(provider: Arc<dyn MetadataProvider>, fallback: OpenLibraryCovers) -> Self {
        Self {
            provider,
            fallback,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Resolve a cover URL for an ISBN, consulting the cache first
    pub async fn cover_url(&self, isbn: &str) -> Option<String> {
        if let Some(cached) = self.cache.get(isbn) {
            return Some(cached.value().clone());
        }

        let url = match self.provider.search_by_isbn(isbn).await {
            Ok(results) => results.into_iter().find_map(|m| m.cover_url),
            Err(e) => {
                tracing::debug!(isbn, error = %e, "cover lookup failed");
                None
            }
        };

        let url = match url {
            Some(url) => Some(url),
            None => self.fallback.fetch_cover_url(isbn).await,
        };

        if let Some(url) = &url {
            self.cache.insert(isbn.to_string(), url.clone());
        }

        url
    }

    /// Fill in a missing cover; no-op when one is already set or there is no ISBN
    pub async fn enrich(&self, book: &mut Book) {
        if book.cover_image_url.is_some() {
            return;
        }
        let Some(isbn) = book.isbn.clone() else {
            return;
        };
        book.cover_image_url = self.cover_url(&isbn).await;
    }
}
