//! Compaction
//!
//! Rewrites a link log so it holds one record per live key.
//!
//! ## Ordering
//! Snapshots are collected most-recent-first (the order `iterate` yields)
//! and written in reverse, so the dump replays oldest to newest like the
//! log it replaces. In fuzzy mode, aliases that a delete left unmapped are
//! tombstoned after the live records.
//!
//! ## Compact-on-open
//! ```text
//! open + replay ──► dump to <log>.compact ──► close ──► rename over <log> ──► reopen
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::log::LogRecord;
use crate::store::FileStore;

/// Suffix of the staging file used while compacting in place
const STAGING_SUFFIX: &str = ".compact";

/// Truncate `target` and write `recent_first` to it, oldest entry first,
/// followed by a tombstone for each of `dropped_aliases`.
///
/// Returns the number of live records written.
pub(crate) fn write_snapshot(
    target: &Path,
    recent_first: &[(String, String)],
    dropped_aliases: &[String],
) -> Result<usize> {
    let mut writer = BufWriter::new(File::create(target)?);

    for (key, link) in recent_first.iter().rev() {
        let record = LogRecord::Live {
            key: key.clone(),
            link: link.clone(),
        };
        writer.write_all(record.encode().as_bytes())?;
    }
    for alias in dropped_aliases {
        let record = LogRecord::Tombstone { key: alias.clone() };
        writer.write_all(record.encode().as_bytes())?;
    }

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    Ok(recent_first.len())
}

/// Open `config.path`, compact it in place, and reopen the result
pub(crate) fn compact_and_reopen(mut config: Config) -> Result<FileStore> {
    let store = FileStore::open_log(config.clone())?;
    let staging = staging_path(&config.path);
    let writes = store.write_count();

    let written = match store.dump(&staging) {
        Ok(written) => written,
        Err(e) => {
            discard_staging(&staging);
            return Err(e);
        }
    };

    if let Err(e) = store.close() {
        discard_staging(&staging);
        return Err(e);
    }
    if let Err(e) = fs::rename(&staging, &config.path) {
        discard_staging(&staging);
        return Err(e.into());
    }

    tracing::info!(
        "Compacted {}: {} writes -> {} live records",
        config.path.display(),
        writes,
        written
    );

    config.compact_on_open = false;
    FileStore::open(config)
}

/// Whether `a` and `b` name the same file
pub(crate) fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from("golinks"));
    name.push(STAGING_SUFFIX);
    path.with_file_name(name)
}

fn discard_staging(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Could not remove staging file {}: {}", path.display(), e),
    }
}
