//! In-memory store.
//!
//! Same lookup, fuzzy and ordering rules as [`FileStore`](super::FileStore),
//! nothing persisted. Useful for tests of code that only needs a [`Store`].

use parking_lot::RwLock;

use crate::error::Result;
use crate::index::LinkState;
use crate::log::LogRecord;

use super::Store;

/// A [`Store`] that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<LinkState>,
}

impl MemoryStore {
    pub fn new(fuzzy: bool) -> Self {
        Self {
            state: RwLock::new(LinkState::new(fuzzy)),
        }
    }

    /// Number of live names
    pub fn len(&self) -> usize {
        self.state.read().live_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Store for MemoryStore {
    fn get(&self, name: &str) -> Option<String> {
        self.state.read().get(name).map(str::to_string)
    }

    fn set(&self, name: &str, link: &str) -> Result<()> {
        // Same validation as the file store, so backends accept the same writes
        let record = LogRecord::for_write(name, link)?;
        self.state.write().apply(record);
        Ok(())
    }

    fn iterate(&self, visit: &mut dyn FnMut(&str, &str) -> Result<()>) -> Result<()> {
        self.state.read().iterate(|name, link| visit(name, link))
    }
}
