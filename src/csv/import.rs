//! Catalog and wishlist importers
//!
//! Both importers are best-effort over the whole input: a bad row is recorded
//! as a skip with a reason and never blocks the remaining rows. The only hard
//! failure is `ImportError::EmptyInput`, raised before any row is processed.
//!
//! The importers construct entities; persisting them is the caller's concern
//! (see `services::catalog_service`). Existing entries are never touched.

use std::collections::HashMap;
use std::fmt;

use crate::csv::parser::{is_blank, parse_records};
use crate::domain::MetadataProvider;
use crate::models::Book;

/// Hard failure aborting an import before any row is processed
#[derive(Debug, PartialEq, Eq)]
pub enum ImportError {
    /// The supplied text contains no usable header/data at all
    EmptyInput,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::EmptyInput => write!(f, "the import text contains no data rows"),
        }
    }
}

impl std::error::Error for ImportError {}

/// Why one row was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingTitle,
    MissingAuthor,
    /// The metadata lookup returned zero results
    NoMatch,
    /// The metadata lookup itself failed
    Lookup(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingTitle => write!(f, "missing title"),
            SkipReason::MissingAuthor => write!(f, "missing author"),
            SkipReason::NoMatch => write!(f, "no search results"),
            SkipReason::Lookup(msg) => write!(f, "lookup failed: {}", msg),
        }
    }
}

/// Per-row diagnostic; recorded, never raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSkip {
    /// 1-based data row number (blank lines don't count)
    pub row: usize,
    /// The row's raw field content, rejoined for display
    pub raw: String,
    pub reason: SkipReason,
}

/// Outcome of a catalog import: constructed entries plus per-row skips
#[derive(Debug)]
pub struct CatalogImport {
    pub books: Vec<Book>,
    pub skipped: Vec<RowSkip>,
}

impl CatalogImport {
    pub fn imported(&self) -> usize {
        self.books.len()
    }
}

/// Outcome of a wishlist import
#[derive(Debug)]
pub struct WishlistImport {
    pub books: Vec<Book>,
    pub skipped: Vec<RowSkip>,
}

impl WishlistImport {
    pub fn imported(&self) -> usize {
        self.books.len()
    }
}

/// Candidate column names per logical field, tried in priority order.
/// First present-and-non-empty wins.
const TITLE_COLUMNS: &[&str] = &["Title"];
const AUTHOR_COLUMNS: &[&str] = &["Primary Author", "Author"];
const ISBN_LIST_COLUMN: &str = "ISBNs";
const ISBN_COLUMN: &str = "ISBN";
const COPIES_COLUMNS: &[&str] = &["Copies", "Total Copies"];
const AVAILABLE_COLUMN: &str = "Available Copies";

fn resolve<'a>(row: &'a HashMap<String, String>, candidates: &[&str]) -> Option<&'a str> {
    candidates
        .iter()
        .find_map(|key| row.get(*key).map(|v| v.trim()).filter(|v| !v.is_empty()))
}

fn optional(row: &HashMap<String, String>, key: &str) -> Option<String> {
    row.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// First ISBN out of an "ISBNs" cell such as "[1406312207]" or
/// "1406312207, 9781406312201"
fn first_isbn(list: &str) -> Option<String> {
    let cleaned = list.replace(['[', ']'], "");
    cleaned
        .split(',')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn resolve_isbn(row: &HashMap<String, String>) -> Option<String> {
    if let Some(list) = resolve(row, &[ISBN_LIST_COLUMN]) {
        return first_isbn(list);
    }
    resolve(row, &[ISBN_COLUMN]).map(str::to_string)
}

/// Copy count from the candidate columns; only strictly positive integers
/// count, anything else falls through to the default of 1.
fn resolve_total_copies(row: &HashMap<String, String>) -> i32 {
    COPIES_COLUMNS
        .iter()
        .find_map(|key| {
            row.get(*key)
                .and_then(|v| v.trim().parse::<i32>().ok())
                .filter(|n| *n > 0)
        })
        .unwrap_or(1)
}

/// Import catalog entries from header-driven CSV text.
///
/// Recognizes both the app's own export format and the "Primary Author" /
/// "ISBNs" / "Copies" convention of third-party catalog exports; see the
/// candidate-column tables above. Fully synchronous, no network.
pub fn import_catalog(text: &str) -> Result<CatalogImport, ImportError> {
    let mut records = parse_records(text).into_iter();

    let headers: Vec<String> = match records.next() {
        Some(header) => header.into_iter().map(|h| h.trim().to_string()).collect(),
        None => return Err(ImportError::EmptyInput),
    };

    let mut books = Vec::new();
    let mut skipped = Vec::new();
    let mut row_number = 0usize;

    for record in records {
        if is_blank(&record) {
            continue;
        }
        row_number += 1;

        let raw = record.join(",");
        let row: HashMap<String, String> = headers
            .iter()
            .zip(record)
            .map(|(header, value)| (header.clone(), value.trim().to_string()))
            .collect();

        let Some(title) = resolve(&row, TITLE_COLUMNS) else {
            tracing::debug!(row = row_number, "skipping row: missing title");
            skipped.push(RowSkip {
                row: row_number,
                raw,
                reason: SkipReason::MissingTitle,
            });
            continue;
        };

        let Some(author) = resolve(&row, AUTHOR_COLUMNS) else {
            tracing::debug!(row = row_number, "skipping row: missing author");
            skipped.push(RowSkip {
                row: row_number,
                raw,
                reason: SkipReason::MissingAuthor,
            });
            continue;
        };

        let mut total_copies = resolve_total_copies(&row);
        let available_copies = row
            .get(AVAILABLE_COLUMN)
            .and_then(|v| v.trim().parse::<i32>().ok())
            .filter(|n| *n >= 0)
            .unwrap_or(total_copies);
        // An explicit available count above the total is evidence of at least
        // that many copies; lift the total so the entity stays consistent.
        if available_copies > total_copies {
            total_copies = available_copies;
        }

        let mut book = Book::new(title, author, total_copies);
        book.available_copies = available_copies;
        book.isbn = resolve_isbn(&row);
        book.language = optional(&row, "Language");
        book.publisher = optional(&row, "Publisher");
        book.published_date = optional(&row, "Published Date");
        book.page_count = row
            .get("Page Count")
            .and_then(|v| v.trim().parse::<i32>().ok())
            .filter(|n| *n >= 0);
        book.notes = optional(&row, "Notes");

        books.push(book);
    }

    if row_number == 0 {
        return Err(ImportError::EmptyInput);
    }

    tracing::info!(
        imported = books.len(),
        skipped = skipped.len(),
        "catalog import finished"
    );

    Ok(CatalogImport { books, skipped })
}

/// Import wishlist entries from positional `Title,Author,ISBN` text.
///
/// The first record is discarded as a header. Each row triggers exactly one
/// metadata lookup (by ISBN when present, otherwise by title and author) and
/// the first search result becomes a wishlist entry. Lookups run strictly
/// in input order, one at a time; a failed or empty lookup skips that row
/// only. Dropping the returned future abandons the in-flight lookup and all
/// unprocessed rows.
pub async fn import_wishlist(
    text: &str,
    provider: &dyn MetadataProvider,
) -> Result<WishlistImport, ImportError> {
    let records = parse_records(text);
    if records.len() < 2 {
        return Err(ImportError::EmptyInput);
    }

    let mut books = Vec::new();
    let mut skipped = Vec::new();
    let mut row_number = 0usize;

    for record in records.into_iter().skip(1) {
        if is_blank(&record) {
            continue;
        }
        row_number += 1;

        let raw = record.join(",");
        let title = record.first().map(|f| f.trim()).unwrap_or_default();
        if title.is_empty() {
            tracing::debug!(row = row_number, "skipping row: missing title");
            skipped.push(RowSkip {
                row: row_number,
                raw,
                reason: SkipReason::MissingTitle,
            });
            continue;
        }

        let author = record.get(1).map(|f| f.trim()).unwrap_or_default();
        let isbn = record.get(2).map(|f| f.trim()).filter(|f| !f.is_empty());

        let results = match isbn {
            Some(isbn) => provider.search_by_isbn(isbn).await,
            None => provider.search_by_title_author(title, author).await,
        };

        match results {
            Ok(results) => match results.first() {
                Some(metadata) => {
                    books.push(Book::wishlist(metadata));
                }
                None => {
                    tracing::debug!(row = row_number, title, "no search results");
                    skipped.push(RowSkip {
                        row: row_number,
                        raw,
                        reason: SkipReason::NoMatch,
                    });
                }
            },
            Err(e) => {
                tracing::warn!(row = row_number, title, error = %e, "wishlist lookup failed");
                skipped.push(RowSkip {
                    row: row_number,
                    raw,
                    reason: SkipReason::Lookup(e.to_string()),
                });
            }
        }
    }

    tracing::info!(
        imported = books.len(),
        skipped = skipped.len(),
        "wishlist import finished"
    );

    Ok(WishlistImport { books, skipped })
}
