//! First-run catalog seeding from a bundled CSV export
//!
//! Only seeds if the store is completely empty.

use crate::csv;
use crate::domain::DomainError;
use crate::infrastructure::state::AppState;

pub async fn seed_catalog_from_csv(state: &AppState, csv_text: &str) -> Result<usize, DomainError> {
    if state.books.count().await? > 0 {
        tracing::info!("books already seeded, skipping");
        return Ok(0);
    }

    let outcome =
        csv::import_catalog(csv_text).map_err(|e| DomainError::Validation(e.to_string()))?;

    let created = outcome.books.len();
    for book in outcome.books {
        state.books.create(book).await?;
    }

    tracing::info!(created, skipped = outcome.skipped.len(), "seeded catalog");
    Ok(created)
}
