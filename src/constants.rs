//! Application constants for SWAPI Fetcher
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain for maintainability and clarity.

use std::time::Duration;

/// Environment variable names
pub mod env {
    /// Environment variable overriding the catalog base URL
    pub const BASE_URL: &str = "SWAPI_BASE_URL";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = "SWAPI-Fetcher/0.1.0 (Catalog Browser)";

    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection pool idle timeout
    pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

    /// Maximum connections per host in pool
    ///
    /// A page load issues up to two sub-resource requests per person, so the
    /// pool must comfortably cover one page of fan-out.
    pub const POOL_MAX_PER_HOST: usize = 25;
}

/// Request pacing configuration
pub mod limits {
    /// Default rate limit for catalog requests (requests per second)
    pub const DEFAULT_RATE_LIMIT_RPS: u32 = 15;
}

/// SWAPI service URLs and endpoints
pub mod swapi {
    /// Catalog archive base URL
    pub const BASE_URL: &str = "https://swapi.dev";

    /// Path of the people collection under the base URL
    pub const PEOPLE_PATH: &str = "api/people/";

    /// Query parameter carrying the page number
    pub const PAGE_PARAM: &str = "page";

    /// Page number the first request asks for
    pub const FIRST_PAGE: &str = "1";
}

/// Fallback display values for unresolved sub-resources
pub mod defaults {
    /// Species name used when no reference exists or the lookup failed
    pub const SPECIES_NAME: &str = "Human";

    /// Homeworld name used when the lookup failed
    pub const HOMEWORLD_NAME: &str = "none";
}

/// Progress reporting and monitoring
pub mod progress {
    use super::Duration;

    /// Spinner animation tick interval
    pub const SPINNER_TICK: Duration = Duration::from_millis(120);
}

/// Logging and debugging constants
pub mod logging {
    /// Default log level
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}

// Re-export commonly used constants for convenience
pub use defaults::{HOMEWORLD_NAME as DEFAULT_HOMEWORLD_NAME, SPECIES_NAME as DEFAULT_SPECIES_NAME};
pub use http::{DEFAULT_TIMEOUT as HTTP_TIMEOUT, USER_AGENT};
pub use limits::DEFAULT_RATE_LIMIT_RPS;
pub use swapi::BASE_URL as SWAPI_BASE_URL;
