//! Recent searches: most recent first, no duplicates, at most five.

use crate::core::storage::{KeyValueStore, keys, load_json, save_json};

pub const MAX_RECENT_SEARCHES: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    entries: Vec<String>,
}

impl RecentSearches {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let stored: Vec<String> = load_json(store, keys::RECENT_SEARCHES).unwrap_or_default();
        // Re-run through `record` so hand-edited files still honour the invariants
        let mut recent = Self::default();
        for term in stored.into_iter().rev() {
            recent.record(&term);
        }
        recent
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> bool {
        save_json(store, keys::RECENT_SEARCHES, &self.entries)
    }

    /// Moves `term` to the front. Blank terms are ignored. Returns whether
    /// the list changed.
    pub fn record(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        if self.entries.first().map(String::as_str) == Some(term) {
            return false;
        }
        self.entries.retain(|existing| existing != term);
        self.entries.insert(0, term.to_string());
        self.entries.truncate(MAX_RECENT_SEARCHES);
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
