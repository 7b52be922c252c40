//! Google Books API client
//!
//! Volume lookup by ISBN and `intitle:`/`inauthor:` search. No retries; a
//! failed request is a terminal outcome for the row that triggered it.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{BookMetadata, DomainError, MetadataProvider};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";

#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleBooksClient {
    /// The base URL is configurable so tests can point at a local mock server.
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

    async fn volumes(&self, query: &str) -> Result<Vec<BookMetadata>, DomainError> {
        let url = format!("{}/volumes?q={}", self.base_url, query);

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(DomainError::External(format!(
                "Google Books API returned status: {}",
                resp.status()
            )));
        }

        let parsed: GoogleBooksResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::External(format!("Failed to parse JSON: {}", e)))?;

        Ok(parsed
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| item.volume_info.into_metadata())
            .collect())
    }
}

#[async_trait]
impl MetadataProvider for GoogleBooksClient {
    async fn search_by_isbn(&self, isbn: &str) -> Result<Vec<BookMetadata>, DomainError> {
        self.volumes(&format!("isbn:{}", urlencoding::encode(isbn)))
            .await
    }

    async fn search_by_title_author(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Vec<BookMetadata>, DomainError> {
        let mut query = format!("intitle:{}", urlencoding::encode(title));
        if !author.trim().is_empty() {
            query.push_str("+inauthor:");
            query.push_str(&urlencoding::encode(author));
        }
        self.volumes(&query).await
    }
}

#[derive(Debug, Deserialize)]
struct GoogleBooksResponse {
    items: Option<Vec<GoogleBookItem>>,
}

#[derive(Debug, Deserialize)]
struct GoogleBookItem {
    #[serde(rename = "volumeInfo")]
    volume_info: GoogleVolumeInfo,
}

#[derive(Debug, Deserialize)]
struct GoogleVolumeInfo {
    title: String,
    authors: Option<Vec<String>>,
    publisher: Option<String>,
    #[serde(rename = "publishedDate")]
    published_date: Option<String>,
    description: Option<String>,
    #[serde(rename = "pageCount")]
    page_count: Option<i32>,
    language: Option<String>,
    #[serde(rename = "industryIdentifiers")]
    industry_identifiers: Option<Vec<IndustryIdentifier>>,
    #[serde(rename = "imageLinks")]
    image_links: Option<GoogleImageLinks>,
}

#[derive(Debug, Deserialize)]
struct IndustryIdentifier {
    #[serde(rename = "type")]
    kind: String,
    identifier: String,
}

#[derive(Debug, Deserialize)]
struct GoogleImageLinks {
    thumbnail: Option<String>,
    // smallThumbnail is also available but often too small
}

impl GoogleVolumeInfo {
    fn into_metadata(self) -> BookMetadata {
        let isbn = self.industry_identifiers.as_ref().and_then(|ids| {
            ids.iter()
                .find(|id| id.kind == "ISBN_13")
                .or_else(|| ids.iter().find(|id| id.kind == "ISBN_10"))
                .map(|id| id.identifier.clone())
        });

        // Google Books returns http links often, upgrade to https
        let cover_url = self
            .image_links
            .and_then(|links| links.thumbnail)
            .map(|thumb| thumb.replace("http://", "https://"));

        BookMetadata {
            title: self.title,
            authors: self.authors.unwrap_or_default(),
            isbn,
            publisher: self.publisher,
            published_date: self.published_date,
            page_count: self.page_count,
            language: self.language,
            description: self.description,
            cover_url,
        }
    }
}
