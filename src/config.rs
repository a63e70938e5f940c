//! Configuration for golinks
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{LinkError, Result};

/// Main configuration for a link store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the append-only link log. Created if missing.
    pub path: PathBuf,

    /// Fsync policy for appended records
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Lookup Configuration
    // -------------------------------------------------------------------------
    /// Resolve `Go-Links`, `go_links` and `golinks` to the same entry
    pub fuzzy: bool,

    // -------------------------------------------------------------------------
    // Compaction Configuration
    // -------------------------------------------------------------------------
    /// Rewrite the log to live entries only before serving
    pub compact_on_open: bool,
}

/// Log sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync after every write (safest, slowest)
    EveryWrite,

    /// fsync after N appended records (balanced durability/performance)
    EveryNEntries { count: usize },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./golinks.log"),
            sync_strategy: SyncStrategy::EveryNEntries { count: 100 },
            fuzzy: false,
            compact_on_open: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configurations the store cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(LinkError::Config("log path must not be empty".to_string()));
        }
        if let SyncStrategy::EveryNEntries { count: 0 } = self.sync_strategy {
            return Err(LinkError::Config(
                "sync interval must be at least one entry".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the log file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Enable or disable fuzzy key matching
    pub fn fuzzy(mut self, enabled: bool) -> Self {
        self.config.fuzzy = enabled;
        self
    }

    /// Compact the log while opening
    pub fn compact_on_open(mut self, enabled: bool) -> Self {
        self.config.compact_on_open = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
