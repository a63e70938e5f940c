//! Log Writer
//!
//! Handles appending records to the link log.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::SyncStrategy;
use crate::error::Result;
use super::LogRecord;

/// Where appended records go
pub trait LogSink: Write {
    /// Push written bytes to stable storage
    fn sync(&mut self) -> io::Result<()>;
}

impl LogSink for File {
    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

/// Appends records to the link log.
///
/// Each record goes out in a single unbuffered `write_all`, so a failed
/// append never leaves bytes behind in a userspace buffer to be flushed by
/// a later, successful one.
pub struct LogWriter<S = File> {
    sink: S,
    path: PathBuf,
    sync_strategy: SyncStrategy,

    /// Records appended since the last fsync
    unsynced: usize,

    /// Records appended through this handle
    appended: u64,
}

impl LogWriter<File> {
    /// Open or create a log file for appending
    pub fn open(path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .create(true)
            .append(true)
            .open(path)?;

        Ok(Self::from_sink(file, path, sync_strategy))
    }
}

impl<S: LogSink> LogWriter<S> {
    /// Append to an already opened sink; `path` is only used in logs
    pub fn from_sink(sink: S, path: impl Into<PathBuf>, sync_strategy: SyncStrategy) -> Self {
        Self {
            sink,
            path: path.into(),
            sync_strategy,
            unsynced: 0,
            appended: 0,
        }
    }

    /// Append a record; fsyncs according to the sync strategy
    pub fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.write_record(record)?;
        self.sync_if_due()
    }

    /// Write one record without syncing.
    ///
    /// Once this returns `Ok` the line is part of the log and will be
    /// replayed on the next open.
    pub fn write_record(&mut self, record: &LogRecord) -> Result<()> {
        let line = record.encode();
        self.sink.write_all(line.as_bytes())?;
        self.appended += 1;
        self.unsynced += 1;
        Ok(())
    }

    /// Sync if the strategy calls for it after the last write
    pub fn sync_if_due(&mut self) -> Result<()> {
        let due = match self.sync_strategy {
            SyncStrategy::EveryWrite => self.unsynced > 0,
            SyncStrategy::EveryNEntries { count } => self.unsynced >= count,
        };
        if due {
            self.sync()?;
        }
        Ok(())
    }

    /// Force sync to disk
    pub fn sync(&mut self) -> Result<()> {
        self.sink.sync()?;
        self.unsynced = 0;
        Ok(())
    }

    /// Sync outstanding records and release the file handle
    pub fn close(mut self) -> Result<()> {
        self.sync()?;
        tracing::debug!(
            "Closed link log {} after {} appends",
            self.path.display(),
            self.appended
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records appended through this handle
    pub fn appended(&self) -> u64 {
        self.appended
    }

    /// Records written since the last fsync
    pub fn unsynced(&self) -> usize {
        self.unsynced
    }

    pub fn get_ref(&self) -> &S {
        &self.sink
    }
}
