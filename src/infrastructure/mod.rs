//! Infrastructure layer - Concrete wiring
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Tracing setup (telemetry)
//! - In-memory repository implementations (memory)
//! - Application state (state)
//! - First-run catalog seeding (seed)

pub mod config;
pub mod memory;
pub mod seed;
pub mod state;
pub mod telemetry;

pub use memory::*;
pub use state::AppState;
