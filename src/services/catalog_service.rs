//! Catalog operations: manual entry, CSV import/export, wishlist
//! acquisition, search, and list grouping.

use std::cmp::Ordering;

use strsim::jaro_winkler;
use uuid::Uuid;

use crate::csv;
use crate::csv::import::RowSkip;
use crate::domain::{BookFilter, DomainError};
use crate::infrastructure::state::AppState;
use crate::models::{Book, Language};
use crate::services::activity_logger;
use crate::utils::grouping::{GroupedSections, group_alphabetically};

/// Fuzzy matches below this similarity are discarded
const SEARCH_THRESHOLD: f64 = 0.8;

/// What one CSV import did, for the shell's "N imported, M skipped" summary
#[derive(Debug)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: Vec<RowSkip>,
}

fn validate(book: &Book) -> Result<(), DomainError> {
    if book.title.trim().is_empty() {
        return Err(DomainError::Validation("title must not be empty".into()));
    }
    if book.author.trim().is_empty() {
        return Err(DomainError::Validation("author must not be empty".into()));
    }
    if book.available_copies < 0 || book.available_copies > book.total_copies {
        return Err(DomainError::Validation(
            "available copies must be between 0 and the total".into(),
        ));
    }
    if !book.is_wishlist_item && book.total_copies < 1 {
        return Err(DomainError::Validation(
            "catalog entries need at least one copy".into(),
        ));
    }
    Ok(())
}

/// Add a manually entered book (catalog or wishlist) and journal it
pub async fn add_book(state: &AppState, book: Book) -> Result<Book, DomainError> {
    validate(&book)?;

    let created = state.books.create(book).await?;
    if created.is_wishlist_item {
        activity_logger::log_wishlist_added(state, &created).await;
    } else {
        activity_logger::log_book_added(state, &created, created.total_copies).await;
    }
    Ok(created)
}

/// Add copies to an existing catalog entry
pub async fn add_copies(state: &AppState, book_id: Uuid, count: i32) -> Result<Book, DomainError> {
    if count < 1 {
        return Err(DomainError::Validation("copy count must be positive".into()));
    }

    let mut book = state
        .books
        .find_by_id(book_id)
        .await?
        .ok_or(DomainError::NotFound)?;
    if book.is_wishlist_item {
        return Err(DomainError::InvalidState(
            "wishlist items have no copies; acquire the item instead".into(),
        ));
    }

    book.total_copies += count;
    book.available_copies += count;
    let book = state.books.update(book).await?;

    activity_logger::log_copies_added(state, &book, count).await;
    Ok(book)
}

/// Move a wishlist entry into the catalog with `copies` copies
pub async fn acquire_wishlist_item(
    state: &AppState,
    book_id: Uuid,
    copies: i32,
) -> Result<Book, DomainError> {
    if copies < 1 {
        return Err(DomainError::Validation("copy count must be positive".into()));
    }

    let mut book = state
        .books
        .find_by_id(book_id)
        .await?
        .ok_or(DomainError::NotFound)?;
    if !book.is_wishlist_item {
        return Err(DomainError::InvalidState(
            "book is not a wishlist item".into(),
        ));
    }

    book.is_wishlist_item = false;
    book.total_copies = copies;
    book.available_copies = copies;
    let book = state.books.update(book).await?;

    tracing::info!(title = %book.title, copies, "wishlist item acquired");
    activity_logger::log_wishlist_fulfilled(state, &book, copies).await;
    Ok(book)
}

/// Import catalog entries from CSV text and persist them.
///
/// Each row becomes a new entry; existing entries are never touched. A bad
/// row is reported in the summary, not raised.
pub async fn import_catalog_csv(state: &AppState, text: &str) -> Result<ImportSummary, DomainError> {
    let outcome = csv::import_catalog(text).map_err(|e| DomainError::Validation(e.to_string()))?;

    let mut imported = 0usize;
    for book in outcome.books {
        state.books.create(book).await?;
        imported += 1;
    }

    activity_logger::log_catalog_import(state, imported).await;
    Ok(ImportSummary {
        imported,
        skipped: outcome.skipped,
    })
}

/// Import wishlist entries from CSV text, one metadata lookup per row
pub async fn import_wishlist_csv(
    state: &AppState,
    text: &str,
) -> Result<ImportSummary, DomainError> {
    let outcome = csv::import_wishlist(text, state.metadata.as_ref())
        .await
        .map_err(|e| DomainError::Validation(e.to_string()))?;

    let mut imported = 0usize;
    for book in outcome.books {
        state.books.create(book).await?;
        imported += 1;
    }

    activity_logger::log_wishlist_import(state, imported).await;
    Ok(ImportSummary {
        imported,
        skipped: outcome.skipped,
    })
}

/// Serialize the catalog (non-wishlist entries) to CSV
pub async fn export_catalog_csv(state: &AppState) -> Result<String, DomainError> {
    let books = state
        .books
        .find_all(BookFilter {
            wishlist: Some(false),
            ..Default::default()
        })
        .await?;
    Ok(csv::export_books(&books))
}

/// Serialize the wishlist to CSV
pub async fn export_wishlist_csv(state: &AppState) -> Result<String, DomainError> {
    let books = state
        .books
        .find_all(BookFilter {
            wishlist: Some(true),
            ..Default::default()
        })
        .await?;
    Ok(csv::export_books(&books))
}

/// Search titles and authors: substring matches rank first, then
/// Jaro-Winkler near-misses above the threshold
pub async fn search_books(state: &AppState, query: &str) -> Result<Vec<Book>, DomainError> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let books = state.books.find_all(BookFilter::default()).await?;
    let mut scored: Vec<(f64, Book)> = books
        .into_iter()
        .filter_map(|book| {
            let title = book.title.to_lowercase();
            let author = book.author.to_lowercase();
            let score = if title.contains(&query) || author.contains(&query) {
                1.0
            } else {
                jaro_winkler(&title, &query).max(jaro_winkler(&author, &query))
            };
            (score >= SEARCH_THRESHOLD).then_some((score, book))
        })
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.title.cmp(&b.1.title))
    });

    Ok(scored.into_iter().map(|(_, book)| book).collect())
}

/// Distinct recognized languages present in the store, for the filter picker
pub async fn list_languages(state: &AppState) -> Result<Vec<Language>, DomainError> {
    let books = state.books.find_all(BookFilter::default()).await?;

    let mut languages: Vec<Language> = books
        .iter()
        .filter_map(|book| book.language.as_deref().and_then(Language::from_code))
        .collect();
    languages.sort_by_key(|l| l.display_name());
    languages.dedup();

    Ok(languages)
}

/// Catalog entries grouped into A-Z/# sections for the indexed list
pub async fn grouped_catalog(state: &AppState) -> Result<GroupedSections<Book>, DomainError> {
    let books = state
        .books
        .find_all(BookFilter {
            wishlist: Some(false),
            ..Default::default()
        })
        .await?;
    Ok(group_alphabetically(books, |book| book.title.as_str()))
}
