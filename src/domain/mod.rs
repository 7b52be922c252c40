//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no HTTP client, no storage
//! engine). Only trait definitions and domain error types.

pub mod errors;
pub mod lookup;
pub mod repositories;

pub use errors::DomainError;
pub use lookup::{BookMetadata, MetadataProvider};
pub use repositories::*;
