//! Thread pagination state machine
//!
//! Walks one thread's comment pages (`{url}&p={n}`, n from 1) to
//! completion. Each page is fetched through the retrying fetcher, gated on
//! the title's date token, and mined for top-level comments. Two
//! independent signals end the walk: the thread falling out of the recency
//! window, and a page contributing no comment that has not been seen
//! before (pages past the last real one repeat earlier content).

use crate::fetch::{fetch_page, FetchOutcome, Pacing, RetryPolicy};
use crate::harvest::dedup::ThreadContext;
use crate::harvest::recency;
use crate::harvest::record::CommentRecord;
use crate::page::{splitter, PageTree};
use crate::sink::RecordSink;
use chrono::Utc;
use reqwest::Client;
use std::fmt;

/// Why a thread's traversal ended
///
/// Every variant is terminal for the thread; none of them is an error for
/// the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreadStop {
    /// The thread's date token fell before the recency cutoff
    OutOfWindow,

    /// A page produced zero newly-accepted comments; primary end signal
    NoNewContent,

    /// A page fetch exhausted all retry attempts
    FetchExhausted,

    /// A page had no title or no parseable date token
    NoTitle,
}

impl fmt::Display for ThreadStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OutOfWindow => "out_of_window",
            Self::NoNewContent => "no_new_content",
            Self::FetchExhausted => "fetch_exhausted",
            Self::NoTitle => "no_title",
        };
        f.write_str(name)
    }
}

/// Result of one thread traversal
#[derive(Debug, Clone, Copy)]
pub struct ThreadOutcome {
    pub stop: ThreadStop,
    pub pages_visited: u32,
    pub records_emitted: u64,
}

/// Walks one thread's pages, emitting accepted comments to the sink
pub struct ThreadPaginator<'a, S: RecordSink> {
    client: &'a Client,
    policy: RetryPolicy,
    pacing: Pacing,
    window_years: u32,
    sink: &'a mut S,
}

impl<'a, S: RecordSink> ThreadPaginator<'a, S> {
    pub fn new(
        client: &'a Client,
        policy: RetryPolicy,
        pacing: Pacing,
        window_years: u32,
        sink: &'a mut S,
    ) -> Self {
        Self {
            client,
            policy,
            pacing,
            window_years,
            sink,
        }
    }

    /// Runs the traversal to a terminal stop
    ///
    /// Sink failures are the only errors that propagate; everything else
    /// resolves to a `ThreadStop`.
    pub async fn run(&mut self, thread_url: &str) -> crate::Result<ThreadOutcome> {
        let mut context: Option<ThreadContext> = None;
        let mut page_num: u32 = 1;
        let mut records_emitted: u64 = 0;

        loop {
            let page_url = format!("{}&p={}", thread_url, page_num);
            tracing::info!(url = %page_url, page = page_num, "Fetching thread page");

            let body = match fetch_page(self.client, &page_url, &self.policy).await {
                FetchOutcome::Success(body) => body,
                FetchOutcome::Exhausted => {
                    return Ok(outcome(ThreadStop::FetchExhausted, page_num, records_emitted));
                }
            };

            match self.process_page(&page_url, &body, &mut context, &mut records_emitted)? {
                Some(stop) => return Ok(outcome(stop, page_num, records_emitted)),
                None => {
                    page_num += 1;
                    self.pacing.pause().await;
                }
            }
        }
    }

    /// Processes one fetched page; returns the stop reason if the walk ends here
    fn process_page(
        &mut self,
        page_url: &str,
        body: &str,
        context: &mut Option<ThreadContext>,
        records_emitted: &mut u64,
    ) -> crate::Result<Option<ThreadStop>> {
        let tree = PageTree::parse(body);

        let title = match tree.title_text() {
            Some(title) => title,
            None => {
                tracing::warn!(url = %page_url, "No title tag found, stopping thread");
                return Ok(Some(ThreadStop::NoTitle));
            }
        };

        let (year, month) = match recency::extract_year_month(&title) {
            Some(pair) => pair,
            None => {
                tracing::warn!(url = %page_url, title = %title, "No date token in title, stopping thread");
                return Ok(Some(ThreadStop::NoTitle));
            }
        };

        match recency::is_within_window(&year, &month, self.window_years, Utc::now()) {
            Some(true) => {}
            Some(false) => {
                tracing::info!(year = %year, month = %month, "Thread out of recency window");
                return Ok(Some(ThreadStop::OutOfWindow));
            }
            None => {
                tracing::warn!(year = %year, month = %month, "Unparseable date token, stopping thread");
                return Ok(Some(ThreadStop::NoTitle));
            }
        }

        // Year/month are pinned to the first titled page for the whole thread
        let context = context.get_or_insert_with(|| ThreadContext::new(year, month));

        let rows = tree.comment_rows();
        tracing::info!(url = %page_url, rows = rows.len(), "Extracting comments");

        let mut new_on_page = false;
        for row in &rows {
            if !row.is_top_level() {
                continue;
            }
            let Some(comment) = &row.comment else {
                continue;
            };

            let (headline, body) = splitter::split(comment);
            let hash = context.comment_hash(&headline, &body);
            if context.seen(hash) {
                continue;
            }
            context.mark_seen(hash);

            let record = CommentRecord::new(
                context.year.clone(),
                context.month.clone(),
                &headline,
                &body,
                hash,
            );
            self.sink.append(&record)?;
            *records_emitted += 1;
            new_on_page = true;
        }

        if !new_on_page {
            tracing::info!(url = %page_url, "No new comments on page, stopping pagination");
            return Ok(Some(ThreadStop::NoNewContent));
        }

        Ok(None)
    }
}

fn outcome(stop: ThreadStop, pages_visited: u32, records_emitted: u64) -> ThreadOutcome {
    ThreadOutcome {
        stop,
        pages_visited,
        records_emitted,
    }
}
