//! Sub-resource enrichment
//!
//! Each person on a page references a homeworld and, sometimes, a species
//! by URI. This module resolves those references to display names with two
//! concurrent lookups per person. Every outcome folds into an
//! [`Enrichment`] so one bad reference never takes the person down with it.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::app::client::SwapiClient;
use crate::app::models::{decode_resource, EnrichedPerson, Enrichment, Person, Planet, Species};
use crate::errors::{ResourceError, ResourceResult};

/// Sub-resources that enrichment resolves down to a display name
trait Named: DeserializeOwned {
    fn into_name(self) -> String;
}

impl Named for Planet {
    fn into_name(self) -> String {
        self.name
    }
}

impl Named for Species {
    fn into_name(self) -> String {
        self.name
    }
}

/// Resolves the sub-resources referenced by person records
#[derive(Debug, Clone)]
pub struct DetailEnricher {
    client: Arc<SwapiClient>,
}

impl DetailEnricher {
    pub fn new(client: Arc<SwapiClient>) -> Self {
        Self { client }
    }

    /// Merges a person with the names of their referenced sub-resources
    ///
    /// The homeworld lookup and the species lookup run concurrently, and
    /// both always settle: a failed fetch becomes [`Enrichment::Failed`]
    /// rather than an error for the whole person.
    pub async fn enrich(&self, person: Person) -> EnrichedPerson {
        let (homeworld, species) = tokio::join!(
            self.resolve_homeworld(&person.homeworld),
            self.resolve_species(person.species.first())
        );

        EnrichedPerson {
            name: person.name,
            species,
            homeworld,
        }
    }

    async fn resolve_homeworld(&self, reference: &str) -> Enrichment {
        match self.fetch_named::<Planet>(reference).await {
            Ok(name) => Enrichment::Resolved(name),
            Err(e) => {
                tracing::warn!("Homeworld lookup failed for {}: {}", reference, e);
                Enrichment::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Resolves the first species reference; records without one stay
    /// [`Enrichment::Missing`] and cost no request
    async fn resolve_species(&self, reference: Option<&String>) -> Enrichment {
        let reference = match reference {
            Some(reference) => reference,
            None => return Enrichment::Missing,
        };

        match self.fetch_named::<Species>(reference).await {
            Ok(name) => Enrichment::Resolved(name),
            Err(e) => {
                tracing::warn!("Species lookup failed for {}: {}", reference, e);
                Enrichment::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Fetches a sub-resource and extracts its display name
    async fn fetch_named<T: Named>(&self, reference: &str) -> ResourceResult<String> {
        let url = Url::parse(reference).map_err(|e| ResourceError::InvalidUrl {
            url: reference.to_string(),
            error: e.to_string(),
        })?;

        let bytes = self.client.get_bytes(&url).await?;
        let resource: T = decode_resource(&bytes)?;
        Ok(resource.into_name())
    }
}
