//! SWAPI Fetcher Library
//!
//! A Rust library for browsing the Star Wars catalog API. Walks the paginated
//! people collection and enriches each person with the names of their
//! referenced sub-resources, with rate limiting and proper error handling.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
