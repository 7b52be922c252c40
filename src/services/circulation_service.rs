//! Checkout and return transitions
//!
//! Availability always stays within `[0, total_copies]`; the guards here are
//! the only code that moves it.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::DomainError;
use crate::infrastructure::state::AppState;
use crate::models::CheckoutRecord;
use crate::services::activity_logger;

/// Check a copy out to a student. Without an explicit due date, the
/// configured loan period applies.
pub async fn checkout_book(
    state: &AppState,
    book_id: Uuid,
    student_library_id: &str,
    staff_id: &str,
    due_date: Option<DateTime<Utc>>,
) -> Result<CheckoutRecord, DomainError> {
    let mut book = state
        .books
        .find_by_id(book_id)
        .await?
        .ok_or(DomainError::NotFound)?;
    if book.is_wishlist_item {
        return Err(DomainError::InvalidState(
            "wishlist items cannot be checked out".into(),
        ));
    }
    if !book.is_available() {
        return Err(DomainError::InvalidState("no copies available".into()));
    }

    let student = state
        .students
        .find_by_library_id(student_library_id)
        .await?
        .ok_or(DomainError::NotFound)?;

    let due = due_date.unwrap_or_else(|| Utc::now() + Duration::days(state.config.loan_period_days));

    book.available_copies -= 1;
    let book = state.books.update(book).await?;

    let record = state
        .checkouts
        .create(CheckoutRecord::new(
            book.id,
            student.library_id.clone(),
            due,
            staff_id,
        ))
        .await?;

    tracing::info!(
        title = %book.title,
        student = %student.library_id,
        due = %due,
        "book checked out"
    );
    activity_logger::log_checkout(state, &book, &student.library_id, due).await;

    Ok(record)
}

/// Mark a checkout as returned and release the copy
pub async fn return_book(
    state: &AppState,
    checkout_id: Uuid,
) -> Result<CheckoutRecord, DomainError> {
    let mut record = state
        .checkouts
        .find_by_id(checkout_id)
        .await?
        .ok_or(DomainError::NotFound)?;
    if record.return_date.is_some() {
        return Err(DomainError::InvalidState(
            "checkout is already returned".into(),
        ));
    }

    record.return_date = Some(Utc::now());
    let record = state.checkouts.update(record).await?;

    // The book may have been deleted while the copy was out; the return
    // itself still stands.
    if let Some(mut book) = state.books.find_by_id(record.book_id).await? {
        book.available_copies = (book.available_copies + 1).min(book.total_copies);
        let book = state.books.update(book).await?;

        tracing::info!(title = %book.title, student = %record.student_library_id, "book returned");
        activity_logger::log_return(state, &book, Some(&record.student_library_id)).await;
    }

    Ok(record)
}

/// All loans currently out
pub async fn active_checkouts(state: &AppState) -> Result<Vec<CheckoutRecord>, DomainError> {
    state.checkouts.find_active().await
}

/// Active loans past their due date as of `now`
pub async fn overdue_checkouts(
    state: &AppState,
    now: DateTime<Utc>,
) -> Result<Vec<CheckoutRecord>, DomainError> {
    let mut records = state.checkouts.find_active().await?;
    records.retain(|record| record.is_overdue(now));
    Ok(records)
}
