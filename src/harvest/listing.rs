//! Listing pagination
//!
//! Walks the submitter's listing pages starting from `submitted?id=...`,
//! discovers recurring-thread links by their visible text, runs a fresh
//! thread traversal for each, and follows the "More" anchor until the
//! listing runs out. A thread that fails is logged and skipped; a listing
//! page that cannot be fetched ends the whole run.

use crate::config::SourceConfig;
use crate::fetch::{fetch_page, FetchOutcome, Pacing, RetryPolicy};
use crate::harvest::stats::HarvestStats;
use crate::harvest::thread::ThreadPaginator;
use crate::page::PageTree;
use crate::sink::RecordSink;
use crate::HarvestError;
use reqwest::Client;

/// Walks all listing pages and every discovered thread
pub struct ListingPaginator<'a, S: RecordSink> {
    client: &'a Client,
    source: &'a SourceConfig,
    policy: RetryPolicy,
    pacing: Pacing,
    window_years: u32,
    sink: &'a mut S,
}

impl<'a, S: RecordSink> ListingPaginator<'a, S> {
    pub fn new(
        client: &'a Client,
        source: &'a SourceConfig,
        policy: RetryPolicy,
        pacing: Pacing,
        window_years: u32,
        sink: &'a mut S,
    ) -> Self {
        Self {
            client,
            source,
            policy,
            pacing,
            window_years,
            sink,
        }
    }

    /// Runs the full listing traversal, returning run statistics
    pub async fn run(&mut self) -> crate::Result<HarvestStats> {
        let mut stats = HarvestStats::default();
        let mut next_url = Some(format!(
            "{}submitted?id={}",
            self.source.base_url, self.source.submitter
        ));

        while let Some(listing_url) = next_url.take() {
            tracing::info!(url = %listing_url, "Fetching listing page");

            let body = match fetch_page(self.client, &listing_url, &self.policy).await {
                FetchOutcome::Success(body) => body,
                // No partial-listing recovery: a dead listing page ends the run
                FetchOutcome::Exhausted => {
                    return Err(HarvestError::ListingExhausted { url: listing_url });
                }
            };

            // Pull everything out of the parsed page before awaiting threads
            let (anchors, more) = {
                let tree = PageTree::parse(&body);
                (
                    tree.listing_anchors(&self.source.thread_marker),
                    tree.more_link(),
                )
            };
            tracing::info!(threads = anchors.len(), "Discovered threads on listing page");

            for href in anchors {
                let thread_url = format!("{}{}", self.source.base_url, href);
                stats.threads_discovered += 1;

                let mut paginator = ThreadPaginator::new(
                    self.client,
                    self.policy,
                    self.pacing,
                    self.window_years,
                    &mut *self.sink,
                );

                match paginator.run(&thread_url).await {
                    Ok(outcome) => {
                        tracing::info!(
                            url = %thread_url,
                            stop = %outcome.stop,
                            pages = outcome.pages_visited,
                            records = outcome.records_emitted,
                            "Thread traversal finished"
                        );
                        stats.record_outcome(&outcome);
                    }
                    Err(e) => {
                        // One bad thread must not abort the listing traversal
                        tracing::warn!(url = %thread_url, error = %e, "Thread traversal failed, skipping");
                        stats.threads_failed += 1;
                    }
                }
            }

            next_url = more.map(|href| format!("{}{}", self.source.base_url, href));
        }

        Ok(stats)
    }
}
