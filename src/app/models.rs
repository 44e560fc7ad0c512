//! Data models for SWAPI Fetcher
//!
//! This module defines the core data structures used throughout the
//! application: the decoded people page, the minimal sub-resource
//! projections, and the enriched record the engine produces.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::constants::defaults;
use crate::errors::ResourceResult;

/// One page of the people collection as returned by the list endpoint
///
/// The cursor to the following page arrives in the `next` field. The API
/// sends a plain string there, or `null` on the last page; anything that is
/// not a parsable URL string decodes to "no further pages" rather than an
/// error.
#[derive(Debug, Clone, Deserialize)]
pub struct PeoplePage {
    /// People on this page, in API order
    #[serde(rename = "results")]
    pub people: Vec<Person>,

    /// Cursor to the following page, absent once the collection is exhausted
    #[serde(default, deserialize_with = "deserialize_cursor")]
    pub next: Option<Url>,
}

/// One person record as listed on a people page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
    /// Display name
    pub name: String,

    /// Species resource URIs; empty for most humans
    #[serde(default)]
    pub species: Vec<String>,

    /// Homeworld resource URI
    pub homeworld: String,
}

/// Minimal projection of a planet resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Planet {
    pub name: String,
}

/// Minimal projection of a species resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Species {
    pub name: String,
}

/// Outcome of one sub-resource lookup
///
/// Distinguishes a reference that was never present on the source record
/// from one whose fetch failed, while the display accessors on
/// [`EnrichedPerson`] preserve the catalog's fallback values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Enrichment {
    /// No reference was present on the source record
    Missing,

    /// Sub-resource fetched and its name extracted
    Resolved(String),

    /// Fetch or decode failed; the error text is kept for diagnostics
    Failed { error: String },
}

impl Enrichment {
    /// The resolved name, or `default` when the lookup is missing or failed
    pub fn resolved_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self {
            Self::Resolved(name) => name,
            _ => default,
        }
    }

    /// Whether the lookup was attempted and failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// A person merged with the names of their referenced sub-resources
///
/// Exactly one of these is produced per [`Person`], in the same relative
/// order as the source page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedPerson {
    /// Display name, taken verbatim from the list entry
    pub name: String,

    /// Species lookup outcome
    pub species: Enrichment,

    /// Homeworld lookup outcome
    pub homeworld: Enrichment,
}

impl EnrichedPerson {
    /// Species display name, falling back to the catalog default
    pub fn species_name(&self) -> &str {
        self.species.resolved_or(defaults::SPECIES_NAME)
    }

    /// Homeworld display name, falling back to the catalog default
    pub fn homeworld_name(&self) -> &str {
        self.homeworld.resolved_or(defaults::HOMEWORLD_NAME)
    }
}

/// Decode a typed resource from a raw response body
pub fn decode_resource<T: DeserializeOwned>(bytes: &[u8]) -> ResourceResult<T> {
    let resource = serde_json::from_slice(bytes)?;
    Ok(resource)
}

/// Tolerant cursor decoding: a parsable URL string yields a cursor, any
/// other value (null, absent via default, numbers, malformed strings) yields
/// none
fn deserialize_cursor<'de, D>(deserializer: D) -> std::result::Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| Url::parse(s).ok()))
}
