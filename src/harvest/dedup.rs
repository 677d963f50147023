//! Per-thread dedup context
//!
//! Thread pages beyond the last real one repeat already-seen comments, so
//! the paginator stops when a page contributes nothing new. That only
//! works if re-extracting identical content yields an identical hash, so
//! the digest is a stable function of the content bytes rather than the
//! process-local `DefaultHasher` (which is randomly seeded per run).

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Stable content digest over (year, month, headline, body)
///
/// First 8 big-endian bytes of the SHA-256 of the concatenated UTF-8
/// bytes. Identical content hashes identically across runs and platforms.
pub fn comment_digest(year: &str, month: &str, headline: &str, body: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(year.as_bytes());
    hasher.update(month.as_bytes());
    hasher.update(headline.as_bytes());
    hasher.update(body.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// State owned by exactly one thread traversal
///
/// Year and month are fixed when the context is created from the first
/// titled page and reused for every hash in the thread, regardless of
/// which page a comment came from. The seen-set is never shared across
/// threads.
#[derive(Debug)]
pub struct ThreadContext {
    pub year: String,
    pub month: String,
    seen: HashSet<u64>,
}

impl ThreadContext {
    pub fn new(year: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            seen: HashSet::new(),
        }
    }

    /// Hashes a comment under this thread's fixed year/month
    pub fn comment_hash(&self, headline: &str, body: &str) -> u64 {
        comment_digest(&self.year, &self.month, headline, body)
    }

    /// Returns true if this hash was already emitted for this thread
    pub fn seen(&self, hash: u64) -> bool {
        self.seen.contains(&hash)
    }

    pub fn mark_seen(&mut self, hash: u64) {
        self.seen.insert(hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let a = comment_digest("2024", "June", "Acme | Engineer", "We are hiring.");
        let b = comment_digest("2024", "June", "Acme | Engineer", "We are hiring.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_varies_with_each_field() {
        let base = comment_digest("2024", "June", "headline", "body");
        assert_ne!(base, comment_digest("2023", "June", "headline", "body"));
        assert_ne!(base, comment_digest("2024", "July", "headline", "body"));
        assert_ne!(base, comment_digest("2024", "June", "other", "body"));
        assert_ne!(base, comment_digest("2024", "June", "headline", "other"));
    }

    #[test]
    fn test_context_seen_tracking() {
        let mut ctx = ThreadContext::new("2024", "June");
        let hash = ctx.comment_hash("headline", "body");

        assert!(!ctx.seen(hash));
        ctx.mark_seen(hash);
        assert!(ctx.seen(hash));
    }

    #[test]
    fn test_contexts_do_not_share_seen_sets() {
        let mut first = ThreadContext::new("2024", "June");
        let second = ThreadContext::new("2024", "June");
        let hash = first.comment_hash("headline", "body");

        first.mark_seen(hash);
        assert!(!second.seen(hash));
    }
}
