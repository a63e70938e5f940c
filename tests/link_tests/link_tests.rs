//! Tests for link handling
//!
//! These tests verify:
//! - Only absolute URLs are accepted, in normalized form
//! - `go/<name>` links to existing entries resolve through the host
//! - Deleting a missing name writes nothing

use std::fs;

use golinks::config::{Config, SyncStrategy};
use golinks::link::{canonicalize_alias, delete_existing, normalize_link, prepare_link};
use golinks::{FileStore, LinkError, MemoryStore, Store};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn store_with(entries: &[(&str, &str)], fuzzy: bool) -> MemoryStore {
    let store = MemoryStore::new(fuzzy);
    for (name, link) in entries {
        store.set(name, link).unwrap();
    }
    store
}

// =============================================================================
// Normalization Tests
// =============================================================================

#[test]
fn test_normalize_accepts_absolute_urls() {
    assert_eq!(
        normalize_link("https://example.com/docs").unwrap(),
        "https://example.com/docs"
    );
}

#[test]
fn test_normalize_lowercases_scheme_and_host() {
    assert_eq!(
        normalize_link("HTTPS://Example.COM/Docs").unwrap(),
        "https://example.com/Docs"
    );
}

#[test]
fn test_normalize_drops_default_port_and_adds_root_path() {
    assert_eq!(
        normalize_link("https://example.com:443").unwrap(),
        "https://example.com/"
    );
    assert_eq!(
        normalize_link("http://example.com:8080/a").unwrap(),
        "http://example.com:8080/a"
    );
}

#[test]
fn test_normalize_encodes_spaces() {
    let link = normalize_link("https://example.com/a b").unwrap();

    assert_eq!(link, "https://example.com/a%20b");
    // The result always fits the log format
    assert!(golinks::log::LogRecord::for_write("docs", &link).is_ok());
}

#[test]
fn test_normalize_rejects_relative_links() {
    for link in ["example.com/docs", "/docs", "go/docs", ""] {
        assert!(
            matches!(normalize_link(link), Err(LinkError::InvalidEntry(_))),
            "{:?}",
            link
        );
    }
}

// =============================================================================
// Alias Tests
// =============================================================================

#[test]
fn test_alias_to_existing_name() {
    let store = store_with(&[("docs", "https://docs.example.com")], false);

    assert_eq!(canonicalize_alias(&store, "go", "go/docs"), "https://go/docs");
    assert_eq!(canonicalize_alias(&store, "go", "docs"), "https://go/docs");
    assert_eq!(
        prepare_link(&store, "links.corp", "go/docs").unwrap(),
        "https://links.corp/docs"
    );
}

#[test]
fn test_alias_to_missing_name_is_left_alone() {
    let store = store_with(&[], false);

    assert_eq!(canonicalize_alias(&store, "go", "go/missing"), "go/missing");
    assert!(matches!(
        prepare_link(&store, "go", "go/missing"),
        Err(LinkError::InvalidEntry(_))
    ));
}

#[test]
fn test_alias_ignores_http_links() {
    let store = store_with(&[("docs", "https://docs.example.com")], false);

    assert_eq!(
        canonicalize_alias(&store, "go", "https://other.example.com"),
        "https://other.example.com"
    );
}

#[test]
fn test_alias_empty_name() {
    let store = store_with(&[("docs", "https://docs.example.com")], false);
    assert_eq!(canonicalize_alias(&store, "go", "go/"), "go/");
}

#[test]
fn test_alias_uses_fuzzy_lookup() {
    let store = store_with(&[("Go-Links", "https://golinks.example.com")], true);

    assert_eq!(
        prepare_link(&store, "go", "go/golinks").unwrap(),
        "https://go/golinks"
    );
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_existing_name() {
    let store = store_with(&[("docs", "https://docs.example.com")], false);

    assert!(delete_existing(&store, "docs").unwrap());
    assert_eq!(store.get("docs"), None);
}

#[test]
fn test_delete_missing_name_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("links.log");
    let store = FileStore::open(
        Config::builder()
            .path(&path)
            .sync_strategy(SyncStrategy::EveryWrite)
            .build(),
    )
    .unwrap();
    store.set("docs", "https://docs").unwrap();

    assert!(!delete_existing(&store, "missing").unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "docs https://docs\n");
    assert_eq!(store.write_count(), 1);

    assert!(delete_existing(&store, "docs").unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "docs https://docs\ndocs\n");
}
