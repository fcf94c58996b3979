//! # Effect Persistence
//!
//! Runs the storage side of an `Effect` after `update()` has already changed
//! the in-memory state. Writes are best effort: a failed write is logged by
//! the storage layer and the state stays as `update()` left it.

use log::debug;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::core::storage::KeyValueStore;

/// Performs the storage writes `effect` asks for. `Effect::None` and
/// `Effect::Quit` need no storage and are ignored.
pub fn apply_effect(app: &App, store: &mut dyn KeyValueStore, effect: &Effect) {
    match effect {
        Effect::PersistFavorites => {
            app.favorites.save(store);
        }
        Effect::PersistPreferences(keys) => {
            for key in keys {
                app.preferences.save_key(store, *key);
            }
        }
        Effect::PersistRecentSearches => {
            app.recent_searches.save(store);
        }
        Effect::None | Effect::Quit => {}
    }
}

/// `update()` followed by `apply_effect()`. Returns the effect so the caller
/// can still react to `Effect::Quit`.
pub fn dispatch(app: &mut App, store: &mut dyn KeyValueStore, action: Action) -> Effect {
    debug!("Dispatch: {}", action_name(&action));
    let effect = update(app, action);
    apply_effect(app, store, &effect);
    effect
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::SetLoading(_) => "SetLoading",
        Action::SetError(_) => "SetError",
        Action::SetAnimals(_) => "SetAnimals",
        Action::SetFilteredAnimals(_) => "SetFilteredAnimals",
        Action::SetCurrentAnimal(_) => "SetCurrentAnimal",
        Action::SetSearchTerm(_) => "SetSearchTerm",
        Action::SetFilters(_) => "SetFilters",
        Action::AddFavorite(_) => "AddFavorite",
        Action::RemoveFavorite(_) => "RemoveFavorite",
        Action::ToggleFavorite(_) => "ToggleFavorite",
        Action::SetPreferences(_) => "SetPreferences",
        Action::SetStats(_) => "SetStats",
        Action::SetCurrentPage(_) => "SetCurrentPage",
        Action::SetBreadcrumbs(_) => "SetBreadcrumbs",
        Action::ResetFilters => "ResetFilters",
        Action::RecordSearch(_) => "RecordSearch",
        Action::Quit => "Quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::favorites::Favorites;
    use crate::core::preferences::{Preferences, PreferencesPatch, Theme};
    use crate::core::storage::{MemoryStore, keys, load_json};
    use crate::test_support::loaded_app;

    fn persisted_favorites(store: &MemoryStore) -> Favorites {
        Favorites::load(store)
    }

    #[test]
    fn test_toggle_persists_after_each_call() {
        let mut app = loaded_app();
        let mut store = MemoryStore::new();

        dispatch(&mut app, &mut store, Action::ToggleFavorite("3".to_string()));
        assert_eq!(persisted_favorites(&store), app.favorites);
        assert!(app.is_favorite("3"));

        dispatch(&mut app, &mut store, Action::ToggleFavorite("3".to_string()));
        assert_eq!(persisted_favorites(&store), app.favorites);
        assert!(app.favorites.is_empty());
    }

    #[test]
    fn test_failed_persistence_keeps_in_memory_update() {
        let mut app = loaded_app();
        let mut store = MemoryStore::failing();

        let effect = dispatch(&mut app, &mut store, Action::AddFavorite("1".to_string()));
        assert_eq!(effect, Effect::PersistFavorites);
        assert!(app.is_favorite("1"));
        assert!(store.get(keys::FAVORITES).unwrap().is_none());
    }

    #[test]
    fn test_set_preferences_writes_only_touched_key() {
        let mut app = loaded_app();
        let mut store = MemoryStore::new();

        dispatch(
            &mut app,
            &mut store,
            Action::SetPreferences(PreferencesPatch::theme(Theme::Light)),
        );

        assert_eq!(load_json::<Theme>(&store, keys::THEME), Some(Theme::Light));
        for key in [keys::AUTOPLAY, keys::SOUND, keys::ANIMATIONS, keys::LANGUAGE] {
            assert!(store.get(key).unwrap().is_none(), "{key} should be untouched");
        }
        let defaults = Preferences::default();
        assert_eq!(app.preferences.auto_play, defaults.auto_play);
        assert_eq!(app.preferences.language, defaults.language);
    }

    #[test]
    fn test_record_search_persists_list() {
        let mut app = loaded_app();
        let mut store = MemoryStore::new();
        dispatch(&mut app, &mut store, Action::RecordSearch("elk".to_string()));
        let stored: Option<Vec<String>> = load_json(&store, keys::RECENT_SEARCHES);
        assert_eq!(stored, Some(vec!["elk".to_string()]));
    }

    #[test]
    fn test_non_persisting_actions_write_nothing() {
        let mut app = loaded_app();
        let mut store = MemoryStore::new();
        dispatch(&mut app, &mut store, Action::SetLoading(true));
        dispatch(&mut app, &mut store, Action::ResetFilters);
        assert!(store.get(keys::FAVORITES).unwrap().is_none());
        assert!(store.get(keys::THEME).unwrap().is_none());
    }
}
