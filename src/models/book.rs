use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::BookMetadata;
use crate::models::Language;

/// A catalog entry. Wishlist entries share this shape and are distinguished by
/// `is_wishlist_item` alone; by convention they carry zero copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub isbn: Option<String>,
    pub title: String,
    pub author: String,
    pub total_copies: i32,
    pub available_copies: i32,
    /// ISO 639-1 code, stored verbatim as imported or looked up
    pub language: Option<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub page_count: Option<i32>,
    pub description: Option<String>,
    pub notes: Option<String>,
    /// Populated later by the cover service, never by the importer
    pub cover_image_url: Option<String>,
    /// Set by the shell's image cache once the cover is on disk
    pub cached_cover_filename: Option<String>,
    pub is_wishlist_item: bool,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// New catalog entry; availability defaults to the full copy count
    pub fn new(title: impl Into<String>, author: impl Into<String>, total_copies: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            isbn: None,
            title: title.into(),
            author: author.into(),
            total_copies,
            available_copies: total_copies,
            language: None,
            publisher: None,
            published_date: None,
            page_count: None,
            description: None,
            notes: None,
            cover_image_url: None,
            cached_cover_filename: None,
            is_wishlist_item: false,
            created_at: Utc::now(),
        }
    }

    /// Wishlist entry built from looked-up metadata (zero copies)
    pub fn wishlist(metadata: &BookMetadata) -> Self {
        Self {
            id: Uuid::new_v4(),
            isbn: metadata.isbn.clone(),
            title: metadata.title.clone(),
            author: metadata.author_display(),
            total_copies: 0,
            available_copies: 0,
            language: metadata.language.clone(),
            publisher: metadata.publisher.clone(),
            published_date: metadata.published_date.clone(),
            page_count: metadata.page_count,
            description: metadata.description.clone(),
            notes: None,
            cover_image_url: metadata.cover_url.clone(),
            cached_cover_filename: None,
            is_wishlist_item: true,
            created_at: Utc::now(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    pub fn checked_out_copies(&self) -> i32 {
        self.total_copies - self.available_copies
    }

    /// Display name for the stored language code, if the code is recognized
    pub fn language_name(&self) -> Option<&'static str> {
        self.language
            .as_deref()
            .and_then(Language::from_code)
            .map(|l| l.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_defaults_available_to_total() {
        let book = Book::new("Matilda", "Roald Dahl", 3);
        assert_eq!(book.available_copies, 3);
        assert!(!book.is_wishlist_item);
        assert!(book.is_available());
    }

    #[test]
    fn wishlist_book_has_zero_copies() {
        let meta = BookMetadata {
            title: "Dune".to_string(),
            authors: vec!["Frank Herbert".to_string()],
            language: Some("en".to_string()),
            ..Default::default()
        };
        let book = Book::wishlist(&meta);
        assert!(book.is_wishlist_item);
        assert_eq!(book.total_copies, 0);
        assert_eq!(book.available_copies, 0);
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.language_name(), Some("English"));
    }

    #[test]
    fn wishlist_book_without_authors_uses_placeholder() {
        let meta = BookMetadata {
            title: "Anonymous Work".to_string(),
            ..Default::default()
        };
        assert_eq!(Book::wishlist(&meta).author, "Unknown Author");
    }
}
