//! Link Log Module
//!
//! The append-only text log that is the only durable state of a store.
//!
//! ## Responsibilities
//! - Append one record per write before any in-memory mutation
//! - Scan records in file order on open
//! - Replay records into the in-memory index
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ <key> <link>\n        live entry        │
//! │ <key>\n               tombstone         │
//! │ ...                                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Fields are separated by exactly one space. A line with more than two
//! fields fails replay with [`LinkError::Format`](crate::LinkError::Format).

mod record;
mod reader;
mod writer;
mod replay;

pub use record::LogRecord;
pub use reader::LogReader;
pub use writer::{LogSink, LogWriter};
pub use replay::{LogReplay, ReplayResult};
