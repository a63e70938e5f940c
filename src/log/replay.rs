//! Log Replay
//!
//! Rebuilds the in-memory state by applying log records in file order.

use std::path::Path;

use crate::error::Result;
use crate::index::LinkState;
use super::{LogReader, LogRecord};

/// Replays a link log into memory
pub struct LogReplay;

/// Result of a replay or verification pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayResult {
    /// Records applied, live and tombstone
    pub records_replayed: u64,

    /// Records carrying a link
    pub live_records: u64,

    /// Records deleting a key
    pub tombstones: u64,

    /// Empty lines skipped
    pub blank_lines: u64,
}

impl LogReplay {
    /// Replay every record of the log at `path` into `state`.
    ///
    /// Stops at the first malformed line. The caller must discard `state`
    /// in that case; it holds a prefix of the log.
    pub fn replay(path: &Path, state: &mut LinkState) -> Result<ReplayResult> {
        Self::scan(path, |record| state.apply(record))
    }

    /// Check that every line of the log parses, without building any state
    pub fn verify(path: &Path) -> Result<ReplayResult> {
        Self::scan(path, |_| {})
    }

    fn scan(path: &Path, mut apply: impl FnMut(LogRecord)) -> Result<ReplayResult> {
        let mut reader = LogReader::open(path)?;
        let mut result = ReplayResult::default();

        while let Some(record) = reader.next_record()? {
            result.records_replayed += 1;
            if record.is_tombstone() {
                result.tombstones += 1;
            } else {
                result.live_records += 1;
            }
            apply(record);
        }
        result.blank_lines = reader.blank_lines();

        Ok(result)
    }
}
