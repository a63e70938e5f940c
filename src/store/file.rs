//! File Store
//!
//! The log-backed store that coordinates the log and the index.
//!
//! ## Responsibilities
//! - Replay the log into memory on open
//! - Serve reads from memory under a shared lock
//! - Mirror every write to the log before applying it in memory
//! - Produce compacted snapshots on request

use std::fs::{self, File};
use std::path::Path;

use parking_lot::RwLock;

use crate::compaction;
use crate::config::Config;
use crate::error::{LinkError, Result};
use crate::index::LinkState;
use crate::log::{LogRecord, LogReplay, LogSink, LogWriter};

use super::Store;

/// Link store backed by an append-only log file
///
/// ## Concurrency Model: one RwLock over all mutable state
///
/// - **Reads** (get/iterate/dump): shared lock, run in parallel
/// - **Writes** (set/delete): exclusive lock
///   - log append happens first; the index and order sequence change only
///     if the append succeeded
/// - **Close**: takes `self`, so no other handle can be in use
///
/// `iterate` holds the shared lock while the callback runs. Calling `set`
/// from inside the callback deadlocks.
pub struct FileStore {
    /// Store configuration
    config: Config,

    /// Index, order sequence and log handle
    inner: RwLock<Inner>,
}

struct Inner<S = File> {
    state: LinkState,
    log: LogWriter<S>,
}

impl<S: LogSink> Inner<S> {
    /// Mirror one record to the log, then to memory.
    ///
    /// The in-memory state follows the file: a line that reached the log is
    /// applied even when the sync after it fails.
    fn commit(&mut self, record: LogRecord) -> Result<()> {
        self.log.write_record(&record)?;

        match &record {
            LogRecord::Live { key, link } => tracing::debug!("Set {} -> {}", key, link),
            LogRecord::Tombstone { key } => tracing::debug!("Deleted {}", key),
        }
        self.state.apply(record);

        self.log.sync_if_due()
    }
}

impl FileStore {
    /// Open or create a store with the given config
    ///
    /// On startup:
    /// 1. Create the log file (and parent directories) if missing
    /// 2. Replay every record under the write lock
    /// 3. Compact, if requested, and reopen the compacted log
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        if config.compact_on_open {
            return compaction::compact_and_reopen(config);
        }
        Self::open_log(config)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified log path
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().path(path).build())
    }

    /// Open and replay without compaction
    pub(crate) fn open_log(config: Config) -> Result<Self> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let log = LogWriter::open(&config.path, config.sync_strategy)?;
        let store = Self {
            inner: RwLock::new(Inner {
                state: LinkState::new(config.fuzzy),
                log,
            }),
            config,
        };

        {
            let mut inner = store.inner.write();
            let result = LogReplay::replay(&store.config.path, &mut inner.state)?;

            tracing::info!(
                "Replayed {}: {} records ({} live, {} tombstones), {} live keys",
                store.config.path.display(),
                result.records_replayed,
                result.live_records,
                result.tombstones,
                inner.state.live_count()
            );
            if result.blank_lines > 0 {
                tracing::warn!(
                    "Skipped {} blank lines in {}",
                    result.blank_lines,
                    store.config.path.display()
                );
            }
        }

        Ok(store)
    }

    /// Get the live link for a name
    ///
    /// Falls back to the fuzzy alias when fuzzy matching is enabled.
    pub fn get(&self, name: &str) -> Option<String> {
        self.inner.read().state.get(name).map(str::to_string)
    }

    /// Set a link
    ///
    /// Steps:
    /// 1. Validate and encode the record
    /// 2. Acquire write lock
    /// 3. Write the line to the log
    /// 4. Apply to index and order sequence
    /// 5. Sync, if the strategy says so
    ///
    /// An empty link deletes. Every call appends, even when the link is
    /// unchanged. If the write fails nothing changes; if only the sync
    /// fails, the write is visible and the sync error is returned.
    pub fn set(&self, name: &str, link: &str) -> Result<()> {
        let record = LogRecord::for_write(name, link)?;
        self.inner.write().commit(record)
    }

    /// Delete a name (writes a tombstone)
    pub fn delete(&self, name: &str) -> Result<()> {
        self.set(name, "")
    }

    /// Visit each live name once, most recently written first
    ///
    /// Stops at and returns the first error from `visit`.
    pub fn iterate<F>(&self, visit: F) -> Result<()>
    where
        F: FnMut(&str, &str) -> Result<()>,
    {
        self.inner.read().state.iterate(visit)
    }

    /// Write a minimal log holding only live entries to `target`
    ///
    /// One line per live key, oldest first, so replaying the dump gives the
    /// same index as the live store. In fuzzy mode, aliases a delete left
    /// unmapped follow as tombstones. The live log is never touched; passing
    /// its own path is an error. Returns the number of live records written.
    pub fn dump(&self, target: &Path) -> Result<usize> {
        if compaction::is_same_file(target, &self.config.path) {
            return Err(LinkError::Config(format!(
                "dump target {} is the live log",
                target.display()
            )));
        }

        let (entries, dropped) = {
            let inner = self.inner.read();
            let mut entries = Vec::new();
            inner.state.iterate(|name, link| {
                entries.push((name.to_string(), link.to_string()));
                Ok(())
            })?;
            (entries, inner.state.dropped_aliases())
        };

        compaction::write_snapshot(target, &entries, &dropped)
    }

    /// Close the store, syncing the log
    pub fn close(self) -> Result<()> {
        let inner = self.inner.into_inner();
        inner.log.close()
    }

    // =========================================================================
    // Accessors (for testing and tooling)
    // =========================================================================

    /// Number of live names
    pub fn len(&self) -> usize {
        self.inner.read().state.live_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes replayed plus writes made since open
    pub fn write_count(&self) -> usize {
        self.inner.read().state.write_count()
    }

    /// Get the log path
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn is_fuzzy(&self) -> bool {
        self.config.fuzzy
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Store for FileStore {
    fn get(&self, name: &str) -> Option<String> {
        FileStore::get(self, name)
    }

    fn set(&self, name: &str, link: &str) -> Result<()> {
        FileStore::set(self, name, link)
    }

    fn iterate(&self, visit: &mut dyn FnMut(&str, &str) -> Result<()>) -> Result<()> {
        FileStore::iterate(self, |name, link| visit(name, link))
    }
}
