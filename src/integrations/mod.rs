//! Clients for the public metadata services

pub mod google_books;
pub mod openlibrary;

pub use google_books::GoogleBooksClient;
pub use openlibrary::OpenLibraryCovers;
