//! In-memory repository implementations
//!
//! Backing store for tests, seeding, and the shell's preview mode. The real
//! app swaps these for repositories over the on-device container.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{
    ActivityRepository, BookFilter, BookRepository, CheckoutRepository, DomainError,
    StudentRepository,
};
use crate::models::{Activity, Book, CheckoutRecord, Student};

#[derive(Default)]
pub struct MemoryBookRepository {
    books: DashMap<Uuid, Book>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_all(&self, filter: BookFilter) -> Result<Vec<Book>, DomainError> {
        let mut books: Vec<Book> = self
            .books
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|book| {
                if let Some(wishlist) = filter.wishlist
                    && book.is_wishlist_item != wishlist
                {
                    return false;
                }
                if let Some(title) = &filter.title
                    && !book.title.to_lowercase().contains(&title.to_lowercase())
                {
                    return false;
                }
                if let Some(author) = &filter.author
                    && !book.author.to_lowercase().contains(&author.to_lowercase())
                {
                    return false;
                }
                if let Some(language) = &filter.language
                    && book.language.as_deref() != Some(language.as_str())
                {
                    return false;
                }
                true
            })
            .collect();

        books.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        Ok(books)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, DomainError> {
        Ok(self.books.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, DomainError> {
        Ok(self
            .books
            .iter()
            .find(|entry| entry.value().isbn.as_deref() == Some(isbn))
            .map(|entry| entry.value().clone()))
    }

    async fn create(&self, book: Book) -> Result<Book, DomainError> {
        if self.books.contains_key(&book.id) {
            return Err(DomainError::Storage(format!(
                "book {} already exists",
                book.id
            )));
        }
        self.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, book: Book) -> Result<Book, DomainError> {
        if !self.books.contains_key(&book.id) {
            return Err(DomainError::NotFound);
        }
        self.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.books.remove(&id);
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.books.len())
    }
}

#[derive(Default)]
pub struct MemoryStudentRepository {
    students: DashMap<String, Student>,
}

impl MemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepository for MemoryStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, DomainError> {
        let mut students: Vec<Student> = self
            .students
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        students.sort_by(|a, b| a.library_id.cmp(&b.library_id));
        Ok(students)
    }

    async fn find_by_library_id(&self, library_id: &str) -> Result<Option<Student>, DomainError> {
        Ok(self
            .students
            .get(library_id)
            .map(|entry| entry.value().clone()))
    }

    async fn create(&self, student: Student) -> Result<Student, DomainError> {
        if self.students.contains_key(&student.library_id) {
            return Err(DomainError::Validation(format!(
                "student {} already exists",
                student.library_id
            )));
        }
        self.students
            .insert(student.library_id.clone(), student.clone());
        Ok(student)
    }

    async fn delete(&self, library_id: &str) -> Result<(), DomainError> {
        self.students.remove(library_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCheckoutRepository {
    checkouts: DashMap<Uuid, CheckoutRecord>,
}

impl MemoryCheckoutRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CheckoutRepository for MemoryCheckoutRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CheckoutRecord>, DomainError> {
        Ok(self.checkouts.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_active(&self) -> Result<Vec<CheckoutRecord>, DomainError> {
        let mut records: Vec<CheckoutRecord> = self
            .checkouts
            .iter()
            .map(|entry| entry.value().clone())
            .filter(CheckoutRecord::is_active)
            .collect();
        records.sort_by(|a, b| b.checkout_date.cmp(&a.checkout_date));
        Ok(records)
    }

    async fn find_active_for_book(
        &self,
        book_id: Uuid,
    ) -> Result<Vec<CheckoutRecord>, DomainError> {
        let mut records = self.find_active().await?;
        records.retain(|record| record.book_id == book_id);
        Ok(records)
    }

    async fn create(&self, record: CheckoutRecord) -> Result<CheckoutRecord, DomainError> {
        self.checkouts.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: CheckoutRecord) -> Result<CheckoutRecord, DomainError> {
        if !self.checkouts.contains_key(&record.id) {
            return Err(DomainError::NotFound);
        }
        self.checkouts.insert(record.id, record.clone());
        Ok(record)
    }
}

#[derive(Default)]
pub struct MemoryActivityRepository {
    entries: DashMap<Uuid, Activity>,
}

impl MemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityRepository for MemoryActivityRepository {
    async fn recent(&self, limit: usize) -> Result<Vec<Activity>, DomainError> {
        let mut entries: Vec<Activity> = self
            .entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(limit);
        Ok(entries)
    }

    async fn log(&self, activity: Activity) -> Result<(), DomainError> {
        self.entries.insert(activity.id, activity);
        Ok(())
    }

    async fn since(&self, since: DateTime<Utc>) -> Result<Vec<Activity>, DomainError> {
        let mut entries: Vec<Activity> = self
            .entries
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|activity| activity.timestamp >= since)
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }
}
