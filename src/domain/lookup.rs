//! Remote metadata lookup abstractions
//!
//! A `MetadataProvider` is any service that can resolve a book by ISBN or by a
//! title/author search. The wishlist importer and the cover service depend on
//! this trait rather than on a concrete API client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Book metadata as returned by a lookup service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookMetadata {
    pub title: String,
    pub authors: Vec<String>,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub page_count: Option<i32>,
    pub language: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}

impl BookMetadata {
    /// Authors joined for display/storage, "Unknown Author" when none
    pub fn author_display(&self) -> String {
        if self.authors.is_empty() {
            "Unknown Author".to_string()
        } else {
            self.authors.join(", ")
        }
    }
}

#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Search by ISBN; an empty result set means the ISBN is unknown
    async fn search_by_isbn(&self, isbn: &str) -> Result<Vec<BookMetadata>, DomainError>;

    /// Search by title, optionally narrowed by author (empty string = no author)
    async fn search_by_title_author(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Vec<BookMetadata>, DomainError>;
}
