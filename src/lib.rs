//! # golinks
//!
//! The link store behind a name → link redirect service:
//! - Append-only text log as the only durable state
//! - In-memory index rebuilt by replay on open
//! - Optional fuzzy names (`Go-Links` == `go_links` == `golinks`)
//! - Most-recently-written-first iteration, one visit per name
//! - Log compaction down to live entries
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Serving layer (out of crate)                │
//! │             uses only Store: get / set / iterate             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        FileStore                             │
//! │             (one RwLock: shared reads, exclusive writes)     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌───────────────┐
//!   │  Link Log   │          │  LinkState    │
//!   │  (Append)   │─replay──►│ Index + Order │
//!   └──────┬──────┘          └───────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │ Compaction  │
//!   │ (live only) │
//!   └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use golinks::{Config, FileStore};
//!
//! let config = Config::builder().path("links.log").fuzzy(true).build();
//! let store = FileStore::open(config)?;
//!
//! store.set("Go-Links", "https://example.com/golinks")?;
//! assert_eq!(store.get("golinks").as_deref(), Some("https://example.com/golinks"));
//!
//! store.close()?;
//! # Ok::<(), golinks::LinkError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod log;
pub mod index;
pub mod store;
pub mod link;
mod compaction;
pub mod service;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LinkError, Result};
pub use config::{Config, SyncStrategy};
pub use store::{FileStore, MemoryStore, Store};
pub use service::Lifecycle;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of golinks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
