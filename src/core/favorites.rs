//! # Favorites
//!
//! A set of animal identifiers. Membership only: the set has no order the
//! caller may rely on (it is stored sorted so files diff cleanly).
//!
//! `add`/`remove`/`toggle` are pure in-memory operations. Persisting is a
//! separate step (`save`), which `core::persist` runs after the reducer
//! returns `Effect::PersistFavorites`.

use std::collections::BTreeSet;

use log::info;

use crate::core::storage::{KeyValueStore, keys, load_json, save_json};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the persisted set. Missing or malformed data yields an empty set.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let ids: Vec<String> = load_json(store, keys::FAVORITES).unwrap_or_default();
        let favorites: Self = ids.into_iter().collect();
        info!("Loaded {} favorites", favorites.len());
        favorites
    }

    /// Writes the whole set. Failure is logged by the storage layer.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> bool {
        save_json(store, keys::FAVORITES, &self.to_vec())
    }

    /// Inserts `id`. Returns false if it was already present.
    pub fn add(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Removes `id`. Returns false if it was absent.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Removes `id` if present, otherwise adds it. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

impl FromIterator<String> for Favorites {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn test_add_is_idempotent() {
        let mut favorites = Favorites::new();
        assert!(favorites.add("1"));
        assert!(!favorites.add("1"));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut favorites = Favorites::new();
        assert!(!favorites.remove("9"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut favorites: Favorites = vec!["2".to_string(), "5".to_string()].into_iter().collect();
        let original = favorites.clone();

        assert!(favorites.toggle("3"));
        assert!(favorites.contains("3"));
        assert!(!favorites.toggle("3"));
        assert_eq!(favorites, original);

        assert!(!favorites.toggle("2"));
        assert!(favorites.toggle("2"));
        assert_eq!(favorites, original);
    }

    #[test]
    fn test_duplicates_collapse_on_load() {
        let mut store = MemoryStore::new();
        store
            .set(keys::FAVORITES, r#"["4","1","4"]"#)
            .unwrap();
        let favorites = Favorites::load(&store);
        assert_eq!(favorites.to_vec(), vec!["1", "4"]);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        favorites.add("7");
        favorites.add("3");
        assert!(favorites.save(&mut store));
        assert_eq!(Favorites::load(&store), favorites);
    }

    #[test]
    fn test_malformed_storage_yields_empty() {
        let mut store = MemoryStore::new();
        store.set(keys::FAVORITES, "{oops").unwrap();
        assert!(Favorites::load(&store).is_empty());
    }
}
