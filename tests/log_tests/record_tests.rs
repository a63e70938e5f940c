//! Tests for LogRecord
//!
//! These tests verify:
//! - Parsing of live, tombstone and malformed lines
//! - Encoding to the one-line format
//! - Write validation

use golinks::log::LogRecord;
use golinks::LinkError;

// =============================================================================
// Parse Tests
// =============================================================================

#[test]
fn test_parse_live_entry() {
    let record = LogRecord::parse("docs https://example.com/docs").unwrap();

    assert_eq!(
        record,
        LogRecord::Live {
            key: "docs".to_string(),
            link: "https://example.com/docs".to_string(),
        }
    );
    assert_eq!(record.key(), "docs");
    assert_eq!(record.link(), "https://example.com/docs");
    assert!(!record.is_tombstone());
}

#[test]
fn test_parse_tombstone() {
    let record = LogRecord::parse("docs").unwrap();

    assert_eq!(record, LogRecord::Tombstone { key: "docs".to_string() });
    assert_eq!(record.link(), "");
    assert!(record.is_tombstone());
}

#[test]
fn test_parse_trailing_space_is_tombstone() {
    let record = LogRecord::parse("docs ").unwrap();
    assert!(record.is_tombstone());
    assert_eq!(record.key(), "docs");
}

#[test]
fn test_parse_three_fields_is_malformed() {
    assert!(LogRecord::parse("a b c").is_none());
}

#[test]
fn test_parse_double_space_is_malformed() {
    // Exactly one space separates the fields
    assert!(LogRecord::parse("a  b").is_none());
}

#[test]
fn test_parse_trailing_space_after_link_is_malformed() {
    assert!(LogRecord::parse("a b ").is_none());
}

#[test]
fn test_parse_empty_key_is_malformed() {
    // set("", ..) is rejected, so the log can never hold such a line
    assert!(LogRecord::parse(" https://x").is_none());
    assert!(LogRecord::parse(" ").is_none());
    assert!(LogRecord::for_write("", "https://x").is_err());
}

// =============================================================================
// Encode Tests
// =============================================================================

#[test]
fn test_encode_live_entry() {
    let record = LogRecord::for_write("docs", "https://example.com/docs").unwrap();
    assert_eq!(record.encode(), "docs https://example.com/docs\n");
}

#[test]
fn test_encode_tombstone() {
    let record = LogRecord::for_write("docs", "").unwrap();
    assert_eq!(record.encode(), "docs\n");
}

#[test]
fn test_encoded_tombstone_parses_back_to_tombstone() {
    let record = LogRecord::for_write("docs", "").unwrap();
    let line = record.encode();

    let parsed = LogRecord::parse(line.trim_end_matches('\n')).unwrap();
    assert_eq!(parsed, record);
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_for_write_empty_link_is_tombstone() {
    let record = LogRecord::for_write("docs", "").unwrap();
    assert!(record.is_tombstone());
}

#[test]
fn test_for_write_rejects_empty_key() {
    let result = LogRecord::for_write("", "https://example.com");
    assert!(matches!(result, Err(LinkError::InvalidEntry(_))));
}

#[test]
fn test_for_write_rejects_space_in_key() {
    let result = LogRecord::for_write("my docs", "https://example.com");
    assert!(matches!(result, Err(LinkError::InvalidEntry(_))));
}

#[test]
fn test_for_write_rejects_space_in_link() {
    let result = LogRecord::for_write("docs", "https://example.com/a b");
    assert!(matches!(result, Err(LinkError::InvalidEntry(_))));
}

#[test]
fn test_for_write_rejects_newlines() {
    assert!(LogRecord::for_write("do\ncs", "https://example.com").is_err());
    assert!(LogRecord::for_write("docs", "https://example.com\n").is_err());
    assert!(LogRecord::for_write("docs\r", "https://example.com").is_err());
}

#[test]
fn test_for_write_accepts_unicode() {
    let record = LogRecord::for_write("café", "https://example.com/ça").unwrap();
    assert_eq!(record.encode(), "café https://example.com/ça\n");
}
