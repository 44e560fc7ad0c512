//! People page retrieval
//!
//! This module owns the walk through the paginated people collection: URL
//! construction for the first page, cursor following for every page after
//! it, and the [`PageSource`] seam the coordinator consumes pages through.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::app::client::SwapiClient;
use crate::app::models::{decode_resource, PeoplePage};
use crate::constants::swapi;
use crate::errors::{ResourceError, ResourceResult};

/// Builds a collection URL from its parts
///
/// The path replaces any path present on `base`, and query parameters are
/// appended in the order given. Passing no parameters yields a URL without
/// a query string.
pub fn collection_url(base: &str, path: &str, params: &[(&str, &str)]) -> ResourceResult<Url> {
    let mut url = Url::parse(base).map_err(|e| ResourceError::InvalidUrl {
        url: base.to_string(),
        error: e.to_string(),
    })?;
    url.set_path(path);

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

/// Source of people pages
///
/// The coordinator walks the collection through this seam. The HTTP-backed
/// implementation below is the production source; tests substitute scripted
/// ones.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches one page of the collection
    ///
    /// `None` requests the first page; `Some` follows the cursor taken from
    /// a previously fetched page.
    async fn fetch_page(&self, cursor: Option<&Url>) -> ResourceResult<PeoplePage>;
}

/// HTTP-backed page source for the people collection
#[derive(Debug, Clone)]
pub struct SwapiPageSource {
    client: Arc<SwapiClient>,
    base_url: String,
}

impl SwapiPageSource {
    /// Creates a source for the public catalog
    pub fn new(client: Arc<SwapiClient>) -> Self {
        Self::with_base_url(client, swapi::BASE_URL)
    }

    /// Creates a source rooted at a different base URL
    pub fn with_base_url(client: Arc<SwapiClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// URL of the first page of the collection
    fn first_page_url(&self) -> ResourceResult<Url> {
        collection_url(
            &self.base_url,
            swapi::PEOPLE_PATH,
            &[(swapi::PAGE_PARAM, swapi::FIRST_PAGE)],
        )
    }
}

#[async_trait]
impl PageSource for SwapiPageSource {
    async fn fetch_page(&self, cursor: Option<&Url>) -> ResourceResult<PeoplePage> {
        let url = match cursor {
            Some(next) => next.clone(),
            None => self.first_page_url()?,
        };

        tracing::debug!("Fetching people page: {}", url);
        let bytes = self.client.get_bytes(&url).await?;
        decode_resource(&bytes)
    }
}
