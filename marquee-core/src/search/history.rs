//! Recent-search history

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Most-recent-first list of past queries.
///
/// Queries are trimmed; re-running a query moves it to the front instead of
/// duplicating it (compared case-insensitively). The oldest entry is evicted
/// past `capacity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearches {
    entries: VecDeque<String>,
    capacity: usize,
}

impl RecentSearches {
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() || self.capacity == 0 {
            return;
        }
        self.remove(query);
        self.entries.push_front(query.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Removes a query; returns whether it was present.
    pub fn remove(&mut self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        let before = self.entries.len();
        self.entries.retain(|entry| entry.to_lowercase() != needle);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
