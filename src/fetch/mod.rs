//! Page fetching with retry, backoff, and pacing

mod client;
mod retry;

pub use client::{build_http_client, fetch_page, FetchOutcome};
pub use retry::{Pacing, RetryPolicy};
