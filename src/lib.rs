pub mod csv;
pub mod domain;
pub mod infrastructure;
pub mod integrations;
pub mod models;
pub mod services;
pub mod utils;

// Re-exports for the embedding shell
pub use infrastructure::config::Config;
pub use infrastructure::state::AppState;
pub use models::Book;
