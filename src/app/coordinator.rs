//! Page load coordination
//!
//! This module provides the session layer that walks the people collection:
//! it remembers the cursor between loads, collapses overlapping load
//! requests into one, and turns each raw page into an ordered batch of
//! enriched people ready for display.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use swapi_fetcher::app::{LoadOutcome, PageCoordinator, SwapiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(SwapiClient::new()?);
//! let coordinator = PageCoordinator::new(client);
//!
//! while let LoadOutcome::Loaded(batch) = coordinator.load_next().await? {
//!     for person in &batch.people {
//!         println!("{} ({})", person.name, person.species_name());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};
use url::Url;

use crate::app::client::SwapiClient;
use crate::app::enrich::DetailEnricher;
use crate::app::models::EnrichedPerson;
use crate::app::page::{PageSource, SwapiPageSource};
use crate::errors::Result;

/// Position of the session within the collection
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    /// No page fetched yet
    Start,
    /// Cursor to the next unfetched page
    Next(Url),
    /// Final page consumed
    Exhausted,
}

/// Mutable session state, guarded by a single mutex
#[derive(Debug)]
struct SessionState {
    cursor: Cursor,
    loading: bool,
}

/// One fully enriched page of the collection
#[derive(Debug, Clone)]
pub struct PageBatch {
    /// Enriched people in source page order
    pub people: Vec<EnrichedPerson>,
    next: Option<Url>,
}

impl PageBatch {
    /// Whether the collection continues past this page
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

/// Outcome of one load request
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// A page was fetched and enriched
    Loaded(PageBatch),
    /// Another load was already in flight; nothing was fetched
    AlreadyLoading,
    /// The collection is fully consumed
    EndOfCollection,
}

/// Aggregated statistics for one browsing session
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    /// Pages successfully loaded
    pub pages_loaded: usize,
    /// People enriched across all loaded pages
    pub people_loaded: usize,
    /// Species lookups that failed
    pub species_failures: usize,
    /// Homeworld lookups that failed
    pub homeworld_failures: usize,
    /// Page loads that failed outright
    pub page_errors: usize,
    /// Start time of the session
    pub session_start: DateTime<Utc>,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            pages_loaded: 0,
            people_loaded: 0,
            species_failures: 0,
            homeworld_failures: 0,
            page_errors: 0,
            session_start: Utc::now(),
        }
    }
}

impl SessionStats {
    /// Time elapsed since the session started
    pub fn session_duration(&self) -> chrono::Duration {
        Utc::now() - self.session_start
    }
}

/// Drives sequential page loads through the people collection
///
/// The coordinator is safe to share behind an `Arc`: concurrent calls to
/// [`load_next`](PageCoordinator::load_next) collapse to a single in-flight
/// load, with the extras answered by [`LoadOutcome::AlreadyLoading`].
pub struct PageCoordinator {
    source: Arc<dyn PageSource>,
    enricher: DetailEnricher,
    state: Mutex<SessionState>,
    stats: RwLock<SessionStats>,
}

impl PageCoordinator {
    /// Creates a coordinator for the public catalog
    pub fn new(client: Arc<SwapiClient>) -> Self {
        let source = Arc::new(SwapiPageSource::new(client.clone()));
        Self::with_source(source, client)
    }

    /// Creates a coordinator over a custom page source
    pub fn with_source(source: Arc<dyn PageSource>, client: Arc<SwapiClient>) -> Self {
        Self {
            source,
            enricher: DetailEnricher::new(client),
            state: Mutex::new(SessionState {
                cursor: Cursor::Start,
                loading: false,
            }),
            stats: RwLock::new(SessionStats::default()),
        }
    }

    /// Loads and enriches the next page of the collection
    ///
    /// At most one load is in flight at a time. The cursor only advances
    /// after a page has been fetched and enriched successfully, so a failed
    /// load leaves the session pointed at the same page for the next call.
    pub async fn load_next(&self) -> Result<LoadOutcome> {
        let target = {
            let mut state = self.state.lock().await;
            if state.loading {
                debug!("Load request ignored: another load is in flight");
                return Ok(LoadOutcome::AlreadyLoading);
            }

            let target = match &state.cursor {
                Cursor::Start => None,
                Cursor::Next(url) => Some(url.clone()),
                Cursor::Exhausted => {
                    debug!("Load request after the final page");
                    return Ok(LoadOutcome::EndOfCollection);
                }
            };

            state.loading = true;
            target
        };

        let outcome = self.fetch_and_enrich(target.as_ref()).await;

        let mut state = self.state.lock().await;
        state.loading = false;

        match outcome {
            Ok(batch) => {
                state.cursor = match &batch.next {
                    Some(url) => Cursor::Next(url.clone()),
                    None => Cursor::Exhausted,
                };
                drop(state);

                self.record_page(&batch).await;
                Ok(LoadOutcome::Loaded(batch))
            }
            Err(e) => {
                // Cursor untouched: the next call retries the same page
                drop(state);

                self.stats.write().await.page_errors += 1;
                warn!("Page load failed ({}): {}", e.category(), e);
                Err(e)
            }
        }
    }

    /// Fetches one page and enriches every person on it
    ///
    /// Enrichment runs concurrently across the page while the batch keeps
    /// source page order.
    async fn fetch_and_enrich(&self, cursor: Option<&Url>) -> Result<PageBatch> {
        let page = self.source.fetch_page(cursor).await?;
        let next = page.next.clone();

        let people = join_all(
            page.people
                .into_iter()
                .map(|person| self.enricher.enrich(person)),
        )
        .await;

        Ok(PageBatch { people, next })
    }

    async fn record_page(&self, batch: &PageBatch) {
        let species_failures = batch.people.iter().filter(|p| p.species.is_failed()).count();
        let homeworld_failures = batch
            .people
            .iter()
            .filter(|p| p.homeworld.is_failed())
            .count();

        let mut stats = self.stats.write().await;
        stats.pages_loaded += 1;
        stats.people_loaded += batch.people.len();
        stats.species_failures += species_failures;
        stats.homeworld_failures += homeworld_failures;

        info!(
            "Loaded page {} with {} people ({} lookup failures)",
            stats.pages_loaded,
            batch.people.len(),
            species_failures + homeworld_failures
        );
    }

    /// Snapshot of the aggregated session statistics
    pub async fn stats(&self) -> SessionStats {
        self.stats.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::app::models::{PeoplePage, Person};
    use crate::errors::{FetchError, ResourceError, ResourceResult};

    /// Page source that replays a scripted sequence of responses
    struct ScriptedSource {
        pages: std::sync::Mutex<Vec<ResourceResult<PeoplePage>>>,
        seen_cursors: std::sync::Mutex<Vec<Option<Url>>>,
        delay: Duration,
    }

    impl ScriptedSource {
        fn new(pages: Vec<ResourceResult<PeoplePage>>) -> Self {
            Self {
                pages: std::sync::Mutex::new(pages),
                seen_cursors: std::sync::Mutex::new(Vec::new()),
                delay: Duration::ZERO,
            }
        }

        fn with_delay(pages: Vec<ResourceResult<PeoplePage>>, delay: Duration) -> Self {
            Self {
                delay,
                ..Self::new(pages)
            }
        }

        fn calls(&self) -> usize {
            self.seen_cursors.lock().unwrap().len()
        }

        fn seen_cursors(&self) -> Vec<Option<Url>> {
            self.seen_cursors.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageSource for ScriptedSource {
        async fn fetch_page(&self, cursor: Option<&Url>) -> ResourceResult<PeoplePage> {
            self.seen_cursors.lock().unwrap().push(cursor.cloned());
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.pages.lock().unwrap().remove(0)
        }
    }

    fn page(next: Option<&str>) -> PeoplePage {
        PeoplePage {
            people: vec![],
            next: next.map(|url| Url::parse(url).unwrap()),
        }
    }

    fn scripted(pages: Vec<ResourceResult<PeoplePage>>) -> (Arc<ScriptedSource>, PageCoordinator) {
        let source = Arc::new(ScriptedSource::new(pages));
        let client = Arc::new(SwapiClient::new().unwrap());
        let coordinator = PageCoordinator::with_source(source.clone(), client);
        (source, coordinator)
    }

    /// Test that loads walk the cursor chain and then report exhaustion
    #[tokio::test]
    async fn test_loads_follow_cursors_until_exhausted() {
        let (source, coordinator) = scripted(vec![
            Ok(page(Some("https://swapi.dev/api/people/?page=2"))),
            Ok(page(None)),
        ]);

        let first = coordinator.load_next().await.unwrap();
        match first {
            LoadOutcome::Loaded(batch) => assert!(batch.has_more()),
            other => panic!("expected a loaded page, got {:?}", other),
        }

        let second = coordinator.load_next().await.unwrap();
        match second {
            LoadOutcome::Loaded(batch) => assert!(!batch.has_more()),
            other => panic!("expected a loaded page, got {:?}", other),
        }

        assert!(matches!(
            coordinator.load_next().await.unwrap(),
            LoadOutcome::EndOfCollection
        ));
        assert!(matches!(
            coordinator.load_next().await.unwrap(),
            LoadOutcome::EndOfCollection
        ));

        // The source saw the first-page request and then the cursor
        assert_eq!(
            source.seen_cursors(),
            vec![
                None,
                Some(Url::parse("https://swapi.dev/api/people/?page=2").unwrap())
            ]
        );

        let stats = coordinator.stats().await;
        assert_eq!(stats.pages_loaded, 2);
        assert_eq!(stats.page_errors, 0);
    }

    /// Test that requests past the final page never reach the source
    #[tokio::test]
    async fn test_exhausted_session_skips_the_source() {
        let (source, coordinator) = scripted(vec![Ok(page(None))]);

        coordinator.load_next().await.unwrap();
        assert!(matches!(
            coordinator.load_next().await.unwrap(),
            LoadOutcome::EndOfCollection
        ));
        assert_eq!(source.calls(), 1);
    }

    /// Test that concurrent load requests collapse to one fetch
    #[tokio::test]
    async fn test_concurrent_loads_collapse_to_one() {
        let source = Arc::new(ScriptedSource::with_delay(
            vec![Ok(page(None))],
            Duration::from_millis(100),
        ));
        let client = Arc::new(SwapiClient::new().unwrap());
        let coordinator = PageCoordinator::with_source(source.clone(), client);

        let (first, second) = tokio::join!(coordinator.load_next(), coordinator.load_next());

        let outcomes = [first.unwrap(), second.unwrap()];
        let loaded = outcomes
            .iter()
            .filter(|o| matches!(o, LoadOutcome::Loaded(_)))
            .count();
        let rejected = outcomes
            .iter()
            .filter(|o| matches!(o, LoadOutcome::AlreadyLoading))
            .count();

        assert_eq!(loaded, 1);
        assert_eq!(rejected, 1);
        assert_eq!(source.calls(), 1);

        // The guard is released: a later call reaches the state machine
        assert!(matches!(
            coordinator.load_next().await.unwrap(),
            LoadOutcome::EndOfCollection
        ));
    }

    /// Test that a failed load keeps the cursor so the page can be retried
    #[tokio::test]
    async fn test_failed_load_retries_the_same_page() {
        let (source, coordinator) = scripted(vec![
            Err(ResourceError::Fetch(FetchError::ServerError {
                status: 500,
            })),
            Ok(page(None)),
        ]);

        let err = coordinator.load_next().await.unwrap_err();
        assert_eq!(err.category(), "resource");
        assert!(err.is_recoverable());

        let outcome = coordinator.load_next().await.unwrap();
        assert!(matches!(outcome, LoadOutcome::Loaded(_)));

        // Both attempts asked for the same position
        assert_eq!(source.seen_cursors(), vec![None, None]);

        let stats = coordinator.stats().await;
        assert_eq!(stats.page_errors, 1);
        assert_eq!(stats.pages_loaded, 1);
    }

    /// Test a full load against a mock API, checking order and fallbacks
    ///
    /// The first and last person share a deliberately slow homeworld
    /// lookup, so a batch that ignored source order would lead with
    /// Chewbacca.
    #[tokio::test]
    async fn test_load_next_enriches_in_page_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/people/").query_param("page", "1");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "next": null,
                    "results": [
                        {
                            "name": "Luke Skywalker",
                            "species": [],
                            "homeworld": server.url("/api/planets/1/")
                        },
                        {
                            "name": "Chewbacca",
                            "species": [server.url("/api/species/3/")],
                            "homeworld": server.url("/api/planets/14/")
                        },
                        {
                            "name": "C-3PO",
                            "species": [server.url("/api/species/2/")],
                            "homeworld": server.url("/api/planets/1/")
                        }
                    ]
                }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/planets/1/");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"name": "Tatooine"}))
                .delay(Duration::from_millis(150));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/planets/14/");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"name": "Kashyyyk"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/species/2/");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"name": "Droid"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/species/3/");
            then.status(500);
        });

        let client = Arc::new(SwapiClient::new().unwrap());
        let source = Arc::new(SwapiPageSource::with_base_url(
            client.clone(),
            server.base_url(),
        ));
        let coordinator = PageCoordinator::with_source(source, client);

        let outcome = coordinator.load_next().await.unwrap();
        let batch = match outcome {
            LoadOutcome::Loaded(batch) => batch,
            other => panic!("expected a loaded page, got {:?}", other),
        };

        let names: Vec<&str> = batch.people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Luke Skywalker", "Chewbacca", "C-3PO"]);

        assert_eq!(batch.people[0].species_name(), "Human");
        assert_eq!(batch.people[0].homeworld_name(), "Tatooine");
        assert!(batch.people[1].species.is_failed());
        assert_eq!(batch.people[1].species_name(), "Human");
        assert_eq!(batch.people[1].homeworld_name(), "Kashyyyk");
        assert_eq!(batch.people[2].species_name(), "Droid");
        assert_eq!(batch.people[2].homeworld_name(), "Tatooine");

        let stats = coordinator.stats().await;
        assert_eq!(stats.pages_loaded, 1);
        assert_eq!(stats.people_loaded, 3);
        assert_eq!(stats.species_failures, 1);
        assert_eq!(stats.homeworld_failures, 0);
    }

    #[test]
    fn test_session_stats_start_empty() {
        let stats = SessionStats::default();
        assert_eq!(stats.pages_loaded, 0);
        assert_eq!(stats.people_loaded, 0);
        assert_eq!(stats.page_errors, 0);
        assert!(stats.session_duration().num_seconds() >= 0);
    }

    #[test]
    fn test_person_field_access() {
        // Person stays a plain record so scripted pages are easy to build
        let person = Person {
            name: "Leia Organa".to_string(),
            species: vec![],
            homeworld: "https://swapi.dev/api/planets/2/".to_string(),
        };
        assert!(person.species.first().is_none());
    }
}
