//! Run statistics

use crate::harvest::thread::{ThreadOutcome, ThreadStop};

/// Counters accumulated over one harvest run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestStats {
    pub threads_discovered: u64,
    pub threads_failed: u64,
    pub pages_visited: u64,
    pub records_written: u64,

    pub stopped_out_of_window: u64,
    pub stopped_no_new_content: u64,
    pub stopped_fetch_exhausted: u64,
    pub stopped_no_title: u64,
}

impl HarvestStats {
    /// Folds one finished thread traversal into the counters
    pub fn record_outcome(&mut self, outcome: &ThreadOutcome) {
        self.pages_visited += u64::from(outcome.pages_visited);
        self.records_written += outcome.records_emitted;

        match outcome.stop {
            ThreadStop::OutOfWindow => self.stopped_out_of_window += 1,
            ThreadStop::NoNewContent => self.stopped_no_new_content += 1,
            ThreadStop::FetchExhausted => self.stopped_fetch_exhausted += 1,
            ThreadStop::NoTitle => self.stopped_no_title += 1,
        }
    }

    /// Logs the end-of-run summary
    pub fn log_summary(&self) {
        tracing::info!(
            threads = self.threads_discovered,
            failed = self.threads_failed,
            pages = self.pages_visited,
            records = self.records_written,
            out_of_window = self.stopped_out_of_window,
            no_new_content = self.stopped_no_new_content,
            fetch_exhausted = self.stopped_fetch_exhausted,
            no_title = self.stopped_no_title,
            "Harvest complete"
        );
    }
}
