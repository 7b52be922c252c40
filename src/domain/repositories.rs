//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer (and in the mobile shell,
//! which backs them with the on-device store).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::DomainError;
use crate::models::{Activity, Book, CheckoutRecord, Student};

/// Filter criteria for book queries
#[derive(Debug, Default, Clone)]
pub struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub language: Option<String>,
    /// `Some(true)` restricts to wishlist entries, `Some(false)` to the catalog
    pub wishlist: Option<bool>,
}

/// Repository trait for Book entities
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find all books matching the filter criteria, sorted by title
    async fn find_all(&self, filter: BookFilter) -> Result<Vec<Book>, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, DomainError>;

    /// Find a single book by ISBN
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, DomainError>;

    /// Insert a new book
    async fn create(&self, book: Book) -> Result<Book, DomainError>;

    /// Update an existing book
    async fn update(&self, book: Book) -> Result<Book, DomainError>;

    /// Delete a book by ID
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;

    /// Count all stored books (catalog and wishlist)
    async fn count(&self) -> Result<usize, DomainError>;
}

/// Repository trait for Student entities
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find all students, sorted by library ID
    async fn find_all(&self) -> Result<Vec<Student>, DomainError>;

    /// Find a student by their library ID
    async fn find_by_library_id(&self, library_id: &str) -> Result<Option<Student>, DomainError>;

    /// Insert a new student
    async fn create(&self, student: Student) -> Result<Student, DomainError>;

    /// Delete a student by library ID
    async fn delete(&self, library_id: &str) -> Result<(), DomainError>;
}

/// Repository trait for CheckoutRecord entities
#[async_trait]
pub trait CheckoutRepository: Send + Sync {
    /// Find a checkout by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CheckoutRecord>, DomainError>;

    /// Find all checkouts that have not been returned yet
    async fn find_active(&self) -> Result<Vec<CheckoutRecord>, DomainError>;

    /// Find active checkouts for one book
    async fn find_active_for_book(&self, book_id: Uuid) -> Result<Vec<CheckoutRecord>, DomainError>;

    /// Insert a new checkout record
    async fn create(&self, record: CheckoutRecord) -> Result<CheckoutRecord, DomainError>;

    /// Update an existing checkout record
    async fn update(&self, record: CheckoutRecord) -> Result<CheckoutRecord, DomainError>;
}

/// Repository trait for the activity journal
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Most recent activities first, at most `limit`
    async fn recent(&self, limit: usize) -> Result<Vec<Activity>, DomainError>;

    /// Append one journal entry
    async fn log(&self, activity: Activity) -> Result<(), DomainError>;

    /// Journal entries at or after `since`, most recent first
    async fn since(&self, since: DateTime<Utc>) -> Result<Vec<Activity>, DomainError>;
}
