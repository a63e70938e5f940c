//! Index Module
//!
//! In-memory view of the link log.
//!
//! ## Responsibilities
//! - Map each key to its current link (tombstones are absence)
//! - Keep fuzzy aliases in step with their exact keys
//! - Remember the write order for most-recent-first iteration
//!
//! ## Data Structure Choice
//! Using a HashMap for the index and a Vec for the order sequence:
//! - Point lookups are the hot path (every redirect)
//! - Iteration order comes from the write sequence, not from key order
//! - Locking lives one level up, in the store that owns a `LinkState`

mod fuzzy;
mod order;
mod table;

pub use fuzzy::normalize;
pub use order::{OrderTracker, RecentFirst};
pub use table::Index;

use std::collections::HashSet;

use crate::error::Result;
use crate::log::LogRecord;

/// Index and order sequence, always mutated together
#[derive(Debug, Default)]
pub struct LinkState {
    index: Index,
    order: OrderTracker,
}

impl LinkState {
    /// Create an empty state
    pub fn new(fuzzy: bool) -> Self {
        Self {
            index: Index::new(fuzzy),
            order: OrderTracker::new(),
        }
    }

    /// Apply one write, in log order
    pub fn apply(&mut self, record: LogRecord) {
        self.index.apply(record.key(), record.link());
        self.order.push(record.key());
    }

    /// Live link for `key`, with fuzzy fallback when enabled
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key)
    }

    /// Visit each live key once, most recently written first.
    ///
    /// Stops at and returns the first error from `visit`.
    pub fn iterate<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&str, &str) -> Result<()>,
    {
        for key in self.order.recent_first() {
            if let Some(link) = self.index.get(key) {
                visit(key, link)?;
            }
        }
        Ok(())
    }

    /// Aliases of live keys that are currently unmapped.
    ///
    /// Deleting one spelling drops the alias it shares with its siblings, so
    /// replaying only the live records would bring the alias back. A snapshot
    /// must tombstone these to replay to the same lookups.
    pub fn dropped_aliases(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dropped = Vec::new();
        for key in self.order.recent_first() {
            if self.index.get(key).is_none() {
                continue;
            }
            if let Some(alias) = self.index.alias_of(key) {
                if !self.index.contains(&alias) && seen.insert(alias.clone()) {
                    dropped.push(alias);
                }
            }
        }
        dropped
    }

    /// Number of keys `iterate` would visit
    pub fn live_count(&self) -> usize {
        self.order
            .recent_first()
            .filter(|key| self.index.get(key).is_some())
            .count()
    }

    /// Number of writes applied, repeats and tombstones included
    pub fn write_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_fuzzy(&self) -> bool {
        self.index.is_fuzzy()
    }
}
