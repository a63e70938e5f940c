//! Index implementation
//!
//! HashMap from key to live link, with optional fuzzy aliases.

use std::collections::HashMap;

use super::fuzzy::normalize;

/// Key → current link.
///
/// Tombstones are stored as absence. In fuzzy mode every live key also has
/// its normalized alias mapped to the same link.
#[derive(Debug, Default)]
pub struct Index {
    entries: HashMap<String, String>,
    fuzzy: bool,
}

impl Index {
    /// Create an empty index
    pub fn new(fuzzy: bool) -> Self {
        Self {
            entries: HashMap::new(),
            fuzzy,
        }
    }

    /// Exact lookup first, then the normalized alias in fuzzy mode
    pub fn get(&self, key: &str) -> Option<&str> {
        if let Some(link) = self.entries.get(key) {
            return Some(link.as_str());
        }
        let alias = self.alias(key)?;
        self.entries.get(&alias).map(String::as_str)
    }

    /// Apply one write. An empty link removes the key and its alias.
    pub fn apply(&mut self, key: &str, link: &str) {
        let alias = self.alias(key);

        if link.is_empty() {
            self.entries.remove(key);
            if let Some(alias) = alias {
                self.entries.remove(&alias);
            }
        } else {
            self.entries.insert(key.to_string(), link.to_string());
            if let Some(alias) = alias {
                self.entries.insert(alias, link.to_string());
            }
        }
    }

    /// Whether `key` has a mapping of its own, as an exact key or an alias
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The alias `key` is stored under, if fuzzy mode gives it one
    pub fn alias_of(&self, key: &str) -> Option<String> {
        self.alias(key)
    }

    /// Raw number of mappings, aliases included
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_fuzzy(&self) -> bool {
        self.fuzzy
    }

    fn alias(&self, key: &str) -> Option<String> {
        if !self.fuzzy {
            return None;
        }
        // "--" and "_" have no usable canonical form
        Some(normalize(key)).filter(|alias| !alias.is_empty())
    }
}
