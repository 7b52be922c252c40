//! Application state containing repositories and shared resources

use std::sync::Arc;

use crate::domain::{
    ActivityRepository, BookRepository, CheckoutRepository, DomainError, MetadataProvider,
    StudentRepository,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::memory::{
    MemoryActivityRepository, MemoryBookRepository, MemoryCheckoutRepository,
    MemoryStudentRepository,
};
use crate::integrations::{GoogleBooksClient, OpenLibraryCovers};
use crate::services::cover_service::CoverService;

/// Application state shared across all operations
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub books: Arc<dyn BookRepository>,
    pub students: Arc<dyn StudentRepository>,
    pub checkouts: Arc<dyn CheckoutRepository>,
    pub activities: Arc<dyn ActivityRepository>,
    pub metadata: Arc<dyn MetadataProvider>,
    pub covers: CoverService,
}

impl AppState {
    /// Wire the in-memory store against the real Google Books service
    pub fn new(config: Config) -> Result<Self, DomainError> {
        let google =
            GoogleBooksClient::new(config.google_books_url.clone(), config.lookup_timeout())?;
        Self::with_provider(config, Arc::new(google))
    }

    /// Same wiring with a caller-supplied metadata provider (test seam)
    pub fn with_provider(
        config: Config,
        metadata: Arc<dyn MetadataProvider>,
    ) -> Result<Self, DomainError> {
        let fallback = OpenLibraryCovers::new(
            config.openlibrary_covers_url.clone(),
            config.lookup_timeout(),
        )?;
        let covers = CoverService::new(metadata.clone(), fallback);

        Ok(Self {
            config,
            books: Arc::new(MemoryBookRepository::new()),
            students: Arc::new(MemoryStudentRepository::new()),
            checkouts: Arc::new(MemoryCheckoutRepository::new()),
            activities: Arc::new(MemoryActivityRepository::new()),
            metadata,
            covers,
        })
    }
}
