//! Order tracker
//!
//! Write sequence by key, used to answer "most recently set first" without
//! rescanning the log.

use std::collections::HashSet;
use std::iter::Rev;
use std::slice::Iter;

/// Keys in the order they were written, repeats included
#[derive(Debug, Default)]
pub struct OrderTracker {
    keys: Vec<String>,
}

impl OrderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a write to `key`
    pub fn push(&mut self, key: &str) {
        self.keys.push(key.to_string());
    }

    /// Total writes recorded
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Each distinct key once, newest write first
    pub fn recent_first(&self) -> RecentFirst<'_> {
        RecentFirst {
            keys: self.keys.iter().rev(),
            seen: HashSet::new(),
        }
    }
}

/// Iterator returned by [`OrderTracker::recent_first`]
pub struct RecentFirst<'a> {
    keys: Rev<Iter<'a, String>>,
    seen: HashSet<&'a str>,
}

impl<'a> Iterator for RecentFirst<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        for key in self.keys.by_ref() {
            if self.seen.insert(key.as_str()) {
                return Some(key.as_str());
            }
        }
        None
    }
}
