//! Record persistence

mod jsonl;
mod traits;

pub use jsonl::JsonlSink;
pub use traits::{RecordSink, SinkError, SinkResult};
