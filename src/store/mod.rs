//! Store Module
//!
//! The three-operation contract the serving layer is allowed to use, and the
//! backends that implement it.
//!
//! ## Backends
//! - [`FileStore`]: append-only log on disk, rebuilt into memory on open
//! - [`MemoryStore`]: same semantics, no durability

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// A name → link mapping.
///
/// Deleting is writing an empty link; [`Store::delete`] is provided for
/// readability.
pub trait Store: Send + Sync {
    /// Live link for `name`. Never `Some("")`.
    fn get(&self, name: &str) -> Option<String>;

    /// Write `link` for `name`; an empty link deletes.
    fn set(&self, name: &str, link: &str) -> Result<()>;

    /// Visit each live name once, most recently written first, until
    /// `visit` returns an error.
    ///
    /// `visit` must not call back into the same store: implementations hold
    /// their read lock for the whole walk, and a write from inside the
    /// callback deadlocks.
    fn iterate(&self, visit: &mut dyn FnMut(&str, &str) -> Result<()>) -> Result<()>;

    fn delete(&self, name: &str) -> Result<()> {
        self.set(name, "")
    }
}
