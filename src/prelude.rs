//! Prelude module for SWAPI Fetcher Library
//!
//! This module re-exports the most commonly used items from the library,
//! providing a convenient way to import everything needed for typical usage
//! with a single `use swapi_fetcher::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use swapi_fetcher::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Arc::new(SwapiClient::new()?);
//!     let coordinator = PageCoordinator::new(client);
//!
//!     while let LoadOutcome::Loaded(batch) = coordinator.load_next().await? {
//!         for person in &batch.people {
//!             println!("{} ({})", person.name, person.homeworld_name());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, Result};

// Essential app components that are used in most integrations
pub use crate::app::{
    // Core orchestration
    LoadOutcome,
    PageBatch,
    PageCoordinator,
    SessionStats,

    // Transport and page sources
    ClientConfig,
    PageSource,
    SwapiClient,
    SwapiPageSource,

    // Data types
    EnrichedPerson,
    Enrichment,
    PeoplePage,
    Person,
};

// Configuration
pub use crate::config::AppConfig;

// Commonly used constants
pub use crate::constants::{
    DEFAULT_HOMEWORLD_NAME, DEFAULT_RATE_LIMIT_RPS, DEFAULT_SPECIES_NAME, SWAPI_BASE_URL,
    USER_AGENT,
};

// Standard library re-exports that are commonly needed
pub use std::path::{Path, PathBuf};
pub use std::sync::Arc;

// Common external crate re-exports for convenience
// Note: Only re-export types that users will commonly need,
// not the entire crates which would pollute the namespace
pub use tokio;
