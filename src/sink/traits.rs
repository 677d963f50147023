//! Record sink trait

use crate::harvest::CommentRecord;
use thiserror::Error;

/// Errors that can occur while persisting records
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to append record: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Append-only persistence of emitted comment records
///
/// Each accepted record is appended immediately upon acceptance, not
/// buffered per thread, so a mid-run crash loses at most the in-flight
/// record.
pub trait RecordSink {
    fn append(&mut self, record: &CommentRecord) -> SinkResult<()>;
}
