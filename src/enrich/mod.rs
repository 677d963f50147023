//! Organization enrichment interface
//!
//! A separate batch job looks up organization metadata for the company
//! URLs harvested here, through a third-party lookup API. That job is not
//! part of this crate; only its seam is specified so the harvester's
//! output can be consumed against a stable contract.
//!
//! Implementations must pace themselves to at most one lookup per second
//! and must tolerate missing or malformed responses by yielding `None`
//! for that key rather than failing the batch.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Minimum spacing between lookup calls
pub const LOOKUP_INTERVAL: Duration = Duration::from_secs(1);

/// Errors an enrichment implementation may surface
///
/// A key with no record is not an error; `lookup` returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("Lookup transport failure for {key}: {message}")]
    Transport { key: String, message: String },
}

/// Organization metadata returned by the lookup service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgRecord {
    pub name: Option<String>,
    pub website_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub founded_year: Option<i32>,
    pub estimated_num_employees: Option<u64>,
    pub industries: Option<Vec<String>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub annual_revenue: Option<f64>,
    pub total_funding: Option<f64>,
    pub latest_funding_stage: Option<String>,
}

/// Lookup of organization metadata by an identifying key (company domain)
#[async_trait]
pub trait OrganizationLookup {
    /// Returns zero or one metadata record for the key
    async fn lookup(&self, key: &str) -> Result<Option<OrgRecord>, EnrichError>;
}
