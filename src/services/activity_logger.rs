//! Activity journal writes
//!
//! All loggers are fire-and-forget: a journal failure is traced and dropped,
//! never surfaced to the operation that triggered it.

use chrono::{DateTime, Utc};

use crate::infrastructure::state::AppState;
use crate::models::{Activity, ActivityType, Book};

fn copies_label(count: i32) -> String {
    format!("{} {}", count, if count == 1 { "copy" } else { "copies" })
}

fn books_label(count: usize) -> String {
    format!("{} {}", count, if count == 1 { "book" } else { "books" })
}

async fn record(state: &AppState, activity: Activity) {
    if let Err(e) = state.activities.log(activity).await {
        tracing::warn!(error = %e, "failed to record activity");
    }
}

/// A book entered the catalog
pub async fn log_book_added(state: &AppState, book: &Book, copies: i32) {
    let activity = Activity::new(ActivityType::AddBook)
        .with_book(book.title.clone(), book.author.clone())
        .with_info(copies_label(copies));
    record(state, activity).await;
}

/// Additional copies were added to an existing book
pub async fn log_copies_added(state: &AppState, book: &Book, copies: i32) {
    let activity = Activity::new(ActivityType::AddBook)
        .with_book(book.title.clone(), book.author.clone())
        .with_info(format!("Added {} more", copies_label(copies)));
    record(state, activity).await;
}

pub async fn log_checkout(
    state: &AppState,
    book: &Book,
    student_library_id: &str,
    due_date: DateTime<Utc>,
) {
    let activity = Activity::new(ActivityType::Checkout)
        .with_book(book.title.clone(), book.author.clone())
        .with_student(student_library_id)
        .with_info(format!("Due {}", due_date.format("%b %d, %Y")));
    record(state, activity).await;
}

pub async fn log_return(state: &AppState, book: &Book, student_library_id: Option<&str>) {
    let mut activity = Activity::new(ActivityType::Return)
        .with_book(book.title.clone(), book.author.clone());
    if let Some(library_id) = student_library_id {
        activity = activity.with_student(library_id);
    }
    record(state, activity).await;
}

pub async fn log_wishlist_added(state: &AppState, book: &Book) {
    let activity = Activity::new(ActivityType::AddWishlist)
        .with_book(book.title.clone(), book.author.clone());
    record(state, activity).await;
}

/// A wishlist item was acquired and moved into the catalog
pub async fn log_wishlist_fulfilled(state: &AppState, book: &Book, copies: i32) {
    let activity = Activity::new(ActivityType::FulfillWishlist)
        .with_book(book.title.clone(), book.author.clone())
        .with_info(copies_label(copies));
    record(state, activity).await;
}

pub async fn log_catalog_import(state: &AppState, count: usize) {
    let activity = Activity::new(ActivityType::AddBook)
        .with_book("Import", "CSV Import")
        .with_info(format!("{} imported", books_label(count)));
    record(state, activity).await;
}

pub async fn log_wishlist_import(state: &AppState, count: usize) {
    let activity = Activity::new(ActivityType::AddWishlist)
        .with_book("Import", "CSV Import")
        .with_info(format!("{} imported", books_label(count)));
    record(state, activity).await;
}
