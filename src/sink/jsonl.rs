//! JSONL record sink
//!
//! One JSON object per line, file opened in append mode for the whole run
//! so interrupted runs are resumable without losing prior records.

use crate::harvest::CommentRecord;
use crate::sink::traits::{RecordSink, SinkResult};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append-mode JSONL file sink
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Opens (or creates) the records file in append mode
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl RecordSink for JsonlSink {
    fn append(&mut self, record: &CommentRecord) -> SinkResult<()> {
        let line = serde_json::to_string(record)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        // Flush per record: a crash must not take buffered records with it
        self.file.flush()?;
        Ok(())
    }
}
