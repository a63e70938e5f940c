//! Log record definitions
//!
//! Defines the two shapes a log line can take and how they are parsed,
//! encoded and validated.

use crate::error::{LinkError, Result};

/// A single record in the link log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogRecord {
    /// `key link`
    Live { key: String, link: String },

    /// `key` on its own: the key was deleted
    Tombstone { key: String },
}

impl LogRecord {
    /// Build the record for a `set(key, link)` call.
    ///
    /// An empty link produces a tombstone. Keys and links that would not
    /// survive a round trip through the line format are rejected.
    pub fn for_write(key: &str, link: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(LinkError::InvalidEntry("key must not be empty".to_string()));
        }
        if let Some(c) = key.chars().find(|c| is_separator(*c)) {
            return Err(LinkError::InvalidEntry(format!(
                "key {:?} contains forbidden character {:?}",
                key, c
            )));
        }
        if let Some(c) = link.chars().find(|c| is_separator(*c)) {
            return Err(LinkError::InvalidEntry(format!(
                "link for {:?} contains forbidden character {:?}",
                key, c
            )));
        }

        if link.is_empty() {
            Ok(Self::Tombstone { key: key.to_string() })
        } else {
            Ok(Self::Live {
                key: key.to_string(),
                link: link.to_string(),
            })
        }
    }

    /// Parse one line (without its trailing newline).
    ///
    /// Returns `None` when the line has more than two space-separated fields
    /// or an empty key, neither of which `for_write` can produce.
    /// `"key "` parses as a tombstone, same as `"key"`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split(' ');
        let key = fields.next().filter(|key| !key.is_empty())?;
        let link = fields.next();
        if fields.next().is_some() {
            return None;
        }

        match link {
            None | Some("") => Some(Self::Tombstone { key: key.to_string() }),
            Some(link) => Some(Self::Live {
                key: key.to_string(),
                link: link.to_string(),
            }),
        }
    }

    /// Encode as one log line, newline included
    pub fn encode(&self) -> String {
        match self {
            Self::Live { key, link } => format!("{} {}\n", key, link),
            Self::Tombstone { key } => format!("{}\n", key),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Live { key, .. } | Self::Tombstone { key } => key,
        }
    }

    /// The link, or `""` for a tombstone
    pub fn link(&self) -> &str {
        match self {
            Self::Live { link, .. } => link,
            Self::Tombstone { .. } => "",
        }
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Self::Tombstone { .. })
    }
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == '\n' || c == '\r'
}
