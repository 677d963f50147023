//! Emitted comment records

use serde::{Deserialize, Serialize};

/// One accepted top-level comment, immutable once constructed
///
/// The hash is computed over the split output before newline doubling;
/// the stored headline and body have internal newlines doubled so they
/// read as blank-line-separated paragraphs downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub year: String,
    pub month: String,
    pub headline: String,
    pub body: String,
    pub hash: u64,
}

impl CommentRecord {
    pub fn new(
        year: impl Into<String>,
        month: impl Into<String>,
        headline: &str,
        body: &str,
        hash: u64,
    ) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            headline: headline.replace('\n', "\n\n"),
            body: body.replace('\n', "\n\n"),
            hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newlines_doubled() {
        let record = CommentRecord::new("2024", "June", "a\nb", "c\nd", 7);
        assert_eq!(record.headline, "a\n\nb");
        assert_eq!(record.body, "c\n\nd");
    }

    #[test]
    fn test_serializes_to_flat_json() {
        let record = CommentRecord::new("2024", "June", "headline", "body", 42);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"year":"2024","month":"June","headline":"headline","body":"body","hash":42}"#
        );
    }
}
