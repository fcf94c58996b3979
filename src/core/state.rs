//! # Application State
//!
//! Core business state for the showcase. This module contains domain data
//! only; presentation state (selected list row, focused view, overlays)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── animals: Vec<AnimalRecord>          // full collection, set by SetAnimals
//! ├── filtered_animals: Vec<AnimalRecord> // derived view
//! ├── current_animal: Option<String>      // selection, by id
//! ├── favorites: Favorites                // durable set of ids
//! ├── loading: bool
//! ├── error: Option<AppError>             // last error only
//! ├── search_term: String
//! ├── filters: FilterCriteria
//! ├── preferences: Preferences            // durable, per key
//! ├── stats: Option<AnimalStats>          // fold over `animals`
//! ├── current_page: usize                 // 1-based
//! ├── breadcrumbs: Vec<Breadcrumb>
//! └── recent_searches: RecentSearches     // durable, MRU
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Reads from outside go through `&App`.

use serde::{Deserialize, Serialize};

use crate::core::animal::AnimalRecord;
use crate::core::error::AppError;
use crate::core::favorites::Favorites;
use crate::core::filter::FilterCriteria;
use crate::core::preferences::Preferences;
use crate::core::recent::RecentSearches;
use crate::core::stats::AnimalStats;
use crate::core::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct App {
    pub animals: Vec<AnimalRecord>,
    pub filtered_animals: Vec<AnimalRecord>,
    pub current_animal: Option<String>,
    pub favorites: Favorites,
    pub loading: bool,
    pub error: Option<AppError>,
    pub search_term: String,
    pub filters: FilterCriteria,
    pub preferences: Preferences,
    pub stats: Option<AnimalStats>,
    pub current_page: usize,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub recent_searches: RecentSearches,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            animals: Vec::new(),
            filtered_animals: Vec::new(),
            current_animal: None,
            favorites: Favorites::new(),
            loading: false,
            error: None,
            search_term: String::new(),
            filters: FilterCriteria::default(),
            preferences: Preferences::default(),
            stats: None,
            current_page: 1,
            breadcrumbs: Vec::new(),
            recent_searches: RecentSearches::default(),
        }
    }

    /// Fresh state with the durable parts (favorites, preferences, recent
    /// searches) read back from `store`.
    pub fn from_store(store: &dyn KeyValueStore) -> Self {
        Self {
            favorites: Favorites::load(store),
            preferences: Preferences::load(store),
            recent_searches: RecentSearches::load(store),
            ..Self::new()
        }
    }

    /// Filters plus the active search term, as one set of criteria.
    pub fn active_criteria(&self) -> FilterCriteria {
        let mut criteria = self.filters.clone();
        let term = self.search_term.trim();
        criteria.search_term = if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        };
        criteria
    }

    pub fn find_animal(&self, id: &str) -> Result<&AnimalRecord, AppError> {
        self.animals
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::not_found(id))
    }

    pub fn selected_animal(&self) -> Option<&AnimalRecord> {
        self.current_animal
            .as_deref()
            .and_then(|id| self.animals.iter().find(|a| a.id == id))
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Favorite records in catalogue order.
    pub fn favorite_animals(&self) -> Vec<&AnimalRecord> {
        self.animals
            .iter()
            .filter(|a| self.favorites.contains(&a.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorCode;
    use crate::core::storage::{MemoryStore, keys};
    use crate::test_support::loaded_app;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert!(app.animals.is_empty());
        assert!(!app.loading);
        assert_eq!(app.current_page, 1);
        assert!(app.search_term.is_empty());
        assert!(app.filters.is_empty());
    }

    #[test]
    fn test_from_store_reads_durable_fields() {
        let mut store = MemoryStore::new();
        store.set(keys::FAVORITES, r#"["3"]"#).unwrap();
        store.set(keys::THEME, r#""light""#).unwrap();
        store.set(keys::RECENT_SEARCHES, r#"["tiger"]"#).unwrap();

        let app = App::from_store(&store);
        assert!(app.is_favorite("3"));
        assert_eq!(app.preferences.theme, crate::core::preferences::Theme::Light);
        assert_eq!(app.recent_searches.entries(), &["tiger"]);
    }

    #[test]
    fn test_find_animal_not_found() {
        let app = loaded_app();
        assert_eq!(app.find_animal("6").unwrap().name, "Cheetah");
        let err = app.find_animal("nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_active_criteria_ignores_blank_term() {
        let mut app = loaded_app();
        app.search_term = "   ".to_string();
        assert!(app.active_criteria().search_term.is_none());
        app.search_term = " lion ".to_string();
        assert_eq!(app.active_criteria().search_term.as_deref(), Some("lion"));
    }

    #[test]
    fn test_favorite_animals_in_catalogue_order() {
        let mut app = loaded_app();
        app.favorites.add("7");
        app.favorites.add("2");
        let names: Vec<&str> = app.favorite_animals().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["African Elephant", "Eurasian Elk"]);
    }
}
