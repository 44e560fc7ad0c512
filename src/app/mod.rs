//! Core application logic for SWAPI Fetcher
//!
//! This module contains the main application components including the HTTP
//! client, data models, page retrieval, sub-resource enrichment, and the
//! session coordinator that ties them together.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use swapi_fetcher::app::{LoadOutcome, PageCoordinator, SwapiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a rate-limited catalog client
//! let client = Arc::new(SwapiClient::new()?);
//! let coordinator = PageCoordinator::new(client);
//!
//! // Load the first enriched page
//! if let LoadOutcome::Loaded(batch) = coordinator.load_next().await? {
//!     for person in &batch.people {
//!         println!("{} - {} - {}", person.name, person.species_name(), person.homeworld_name());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod coordinator;
pub mod enrich;
pub mod models;
pub mod page;

// Re-export main public API
pub use client::{ClientConfig, SwapiClient};
pub use coordinator::{LoadOutcome, PageBatch, PageCoordinator, SessionStats};
pub use enrich::DetailEnricher;
pub use models::{decode_resource, EnrichedPerson, Enrichment, PeoplePage, Person, Planet, Species};
pub use page::{collection_url, PageSource, SwapiPageSource};
