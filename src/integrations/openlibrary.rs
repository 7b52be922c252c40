//! OpenLibrary Covers API probe
//!
//! Separate from their ISBN/Books APIs and works very consistently; used as
//! the fallback when Google Books has no thumbnail for an ISBN.

use std::time::Duration;

use crate::domain::DomainError;

pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";

#[derive(Debug, Clone)]
pub struct OpenLibraryCovers {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryCovers {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::External(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Check cover existence with a lightweight HEAD request.
    /// Returns `None` when the cover doesn't exist (404 response).
    pub async fn fetch_cover_url(&self, isbn: &str) -> Option<String> {
        let cover_url = format!("{}/b/isbn/{}-L.jpg", self.base_url, isbn);

        match self.client.head(&cover_url).send().await {
            Ok(resp) if resp.status().is_success() => Some(cover_url),
            _ => None,
        }
    }
}
