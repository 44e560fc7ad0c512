//! Error types for SWAPI Fetcher
//!
//! This module defines the error types for all components of the application.
//! Errors are designed to be actionable and provide clear context for
//! debugging and user feedback.

use std::path::PathBuf;
use thiserror::Error;

/// Transport-level errors for raw HTTP fetches
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed at the network level
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// Server returned a status outside the 2xx range
    #[error("Server error: HTTP {status}")]
    ServerError { status: u16 },
}

/// Errors retrieving and decoding one typed resource
#[derive(Error, Debug)]
pub enum ResourceError {
    /// Transport failure while fetching the resource
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Response body was not the expected JSON shape
    #[error("JSON parsing error in response body")]
    Decode(#[from] serde_json::Error),

    /// A request URI could not be constructed
    #[error("Invalid URL: {url} - {error}")]
    InvalidUrl { url: String, error: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Resource retrieval error
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Check if the error is recoverable (transient)
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Fetch(FetchError::Http(_))
            | AppError::Resource(ResourceError::Fetch(FetchError::Http(_))) => true,

            AppError::Fetch(FetchError::ServerError { status })
            | AppError::Resource(ResourceError::Fetch(FetchError::ServerError { status })) => {
                matches!(status, 429 | 500..=599)
            }

            AppError::Resource(ResourceError::Decode(_))
            | AppError::Resource(ResourceError::InvalidUrl { .. })
            | AppError::Config(_) => false,

            _ => false,
        }
    }

    /// Get error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Fetch(_) => "transport",
            AppError::Resource(_) => "resource",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Transport result type alias
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Resource retrieval result type alias
pub type ResourceResult<T> = std::result::Result<T, ResourceError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
