//! Harvest orchestration
//!
//! Wires the fetcher, page queries, recency gate, dedup context, and sink
//! into the listing and thread traversals.

pub mod dedup;
mod listing;
pub mod recency;
mod record;
mod stats;
mod thread;

pub use dedup::ThreadContext;
pub use listing::ListingPaginator;
pub use record::CommentRecord;
pub use stats::HarvestStats;
pub use thread::{ThreadOutcome, ThreadPaginator, ThreadStop};

use crate::config::Config;
use crate::fetch::{build_http_client, Pacing, RetryPolicy};
use crate::sink::JsonlSink;
use std::path::Path;
use std::time::Duration;

/// Runs a full harvest as described by the configuration
///
/// Opens the records file in append mode for the whole run, walks every
/// listing page and every discovered thread sequentially, and returns the
/// accumulated statistics.
pub async fn run_harvest(config: &Config) -> crate::Result<HarvestStats> {
    let client = build_http_client(&config.fetch, config.proxy.as_ref())?;

    let policy = RetryPolicy::new(config.fetch.max_attempts, config.fetch.backoff_base_secs);
    let pacing = Pacing::new(Duration::from_secs(config.fetch.page_delay_secs));

    let mut sink = JsonlSink::open(Path::new(&config.output.records_path))?;

    let mut paginator = ListingPaginator::new(
        &client,
        &config.source,
        policy,
        pacing,
        config.window.years,
        &mut sink,
    );

    let stats = paginator.run().await?;
    stats.log_summary();
    tracing::info!(path = %config.output.records_path, "Saved comments");

    Ok(stats)
}
