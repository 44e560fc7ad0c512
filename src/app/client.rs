//! HTTP transport for the SWAPI catalog
//!
//! This module handles the configuration and construction of the HTTP
//! client, plus the single fetch primitive the rest of the application is
//! built on: rate-limited GET requests that yield raw response bytes and
//! treat every non-2xx status as an error.

use std::num::NonZeroU32;
use std::time::Duration;

use governor::{clock::DefaultClock, state::InMemoryState, Jitter, Quota, RateLimiter};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{http, limits};
use crate::errors::{ConfigError, ConfigResult, FetchError, FetchResult, Result};

/// Configuration for HTTP client optimizations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// TCP keep-alive settings
    pub tcp_keepalive: Option<Duration>,
    /// TCP nodelay (disable Nagle's algorithm)
    pub tcp_nodelay: bool,
    /// Connection pool idle timeout
    pub pool_idle_timeout: Option<Duration>,
    /// Maximum number of connections per host
    pub pool_max_per_host: usize,
    /// Request timeout
    pub request_timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Rate limit (requests per second)
    pub rate_limit_rps: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tcp_keepalive: Some(Duration::from_secs(30)),
            tcp_nodelay: true,
            pool_idle_timeout: Some(http::POOL_IDLE_TIMEOUT),
            pool_max_per_host: http::POOL_MAX_PER_HOST,
            request_timeout: http::DEFAULT_TIMEOUT,
            connect_timeout: http::CONNECT_TIMEOUT,
            rate_limit_rps: limits::DEFAULT_RATE_LIMIT_RPS,
        }
    }
}

impl ClientConfig {
    /// Builds the HTTP client with the specified configuration
    pub fn build_http_client(&self) -> FetchResult<Client> {
        let mut client_builder = Client::builder()
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(http::USER_AGENT)
            .tcp_nodelay(self.tcp_nodelay)
            .pool_max_idle_per_host(self.pool_max_per_host);

        // Configure TCP keep-alive if specified
        if let Some(keepalive) = self.tcp_keepalive {
            client_builder = client_builder.tcp_keepalive(keepalive);
        }

        // Configure connection pool idle timeout
        if let Some(idle_timeout) = self.pool_idle_timeout {
            client_builder = client_builder.pool_idle_timeout(idle_timeout);
        }

        client_builder.build().map_err(FetchError::Http)
    }
}

/// Rate-limited HTTP client for the catalog API
///
/// All requests made by the page and enrichment layers funnel through
/// [`get_bytes`](SwapiClient::get_bytes), so the rate limit applies to the
/// sub-resource fan-out as well as the page fetches themselves.
#[derive(Debug)]
pub struct SwapiClient {
    client: Client,
    rate_limiter: RateLimiter<governor::state::NotKeyed, InMemoryState, DefaultClock>,
}

impl SwapiClient {
    /// Creates a client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// configured rate limit is invalid
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = config.build_http_client()?;
        let rate_limiter = Self::build_rate_limiter(config.rate_limit_rps)?;
        Ok(Self {
            client,
            rate_limiter,
        })
    }

    /// Builds the rate limiter with the specified rate limit
    fn build_rate_limiter(
        rate_limit_rps: u32,
    ) -> ConfigResult<RateLimiter<governor::state::NotKeyed, InMemoryState, DefaultClock>> {
        let quota = Quota::per_second(NonZeroU32::new(rate_limit_rps).ok_or_else(|| {
            ConfigError::InvalidValue {
                field: "rate_limit_rps".to_string(),
                value: rate_limit_rps.to_string(),
                reason: "must be non-zero".to_string(),
            }
        })?);
        Ok(RateLimiter::direct(quota))
    }

    /// Fetches the raw response body with rate limiting
    ///
    /// Each call is a single attempt. Statuses outside the 2xx range are
    /// surfaced as [`FetchError::ServerError`] so callers never have to
    /// inspect a response object.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to fetch
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails or the server responds
    /// with a non-success status
    pub async fn get_bytes(&self, url: &Url) -> FetchResult<Vec<u8>> {
        // Apply rate limiting with jitter to avoid thundering herd
        self.rate_limiter
            .until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100)))
            .await;

        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Request to {} rejected with HTTP {}", url, status.as_u16());
            return Err(FetchError::ServerError {
                status: status.as_u16(),
            });
        }

        tracing::debug!("Successfully fetched response: {}", url);
        Ok(response.bytes().await?.to_vec())
    }
}
