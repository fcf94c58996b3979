use std::sync::mpsc;
use std::time::{Duration, Instant};

use wildlife::core::action::{Action, filter_animals, search_animals, update};
use wildlife::core::animal::{Category, ConservationStatus};
use wildlife::core::catalogue::{CatalogueSource, StaticCatalogue};
use wildlife::core::error::ErrorCode;
use wildlife::core::filter::{self, FilterCriteria};
use wildlife::core::loader::{fetch_animal, load_catalogue};
use wildlife::core::persist::dispatch;
use wildlife::core::preferences::{PreferencesPatch, Theme};
use wildlife::core::slider::{SliderController, SliderKey, SliderSettings};
use wildlife::core::state::App;
use wildlife::core::storage::{FileStore, KeyValueStore};

// ============================================================================
// Helper Functions
// ============================================================================

fn temp_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("wildlife-it-{}", uuid::Uuid::new_v4()))
}

/// Runs a full load through the channel and applies every action it sent.
async fn load_into(app: &mut App, store: &mut dyn KeyValueStore) {
    let (tx, rx) = mpsc::channel();
    load_catalogue(&StaticCatalogue, Duration::ZERO, ErrorCode::InitError, tx).await;
    for action in rx.try_iter() {
        dispatch(app, store, action);
    }
}

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn test_load_populates_collection_and_stats() {
    let dir = temp_dir();
    let mut store = FileStore::open(dir.clone()).unwrap();
    let mut app = App::from_store(&store);
    load_into(&mut app, &mut store).await;

    assert!(!app.loading);
    assert!(app.error.is_none());
    assert_eq!(app.animals.len(), 7);
    assert_eq!(app.filtered_animals.len(), 7);
    let stats = app.stats.as_ref().unwrap();
    assert_eq!(stats.total_animals, 7);
    assert_eq!(stats.by_continent.get("Africa"), Some(&5));
    assert_eq!(stats.at_risk(ConservationStatus::Endangered), 3);

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_fetch_single_animal() {
    let tiger = tokio_test::block_on(fetch_animal(&StaticCatalogue, "3")).unwrap();
    assert_eq!(tiger.name, "Bengal Tiger");

    let missing = tokio_test::block_on(fetch_animal(&StaticCatalogue, "99")).unwrap_err();
    assert_eq!(missing.code, ErrorCode::NotFound);
}

// ============================================================================
// Search and Filter
// ============================================================================

#[test]
fn test_search_and_filters_compose() {
    let mut app = App::new();
    let animals = tokio_test::block_on(StaticCatalogue.load()).unwrap();
    update(&mut app, Action::SetAnimals(animals));

    filter_animals(
        &mut app,
        FilterCriteria {
            category: Some(Category::Mammal),
            ..Default::default()
        },
    );
    assert_eq!(app.filtered_animals.len(), 7);

    filter_animals(
        &mut app,
        FilterCriteria {
            continent: Some("asia".to_string()),
            ..Default::default()
        },
    );
    let names: Vec<&str> = app.filtered_animals.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Bengal Tiger"]);

    // Search narrows within the active filters
    search_animals(&mut app, "lion");
    assert!(app.filtered_animals.is_empty());

    update(&mut app, Action::ResetFilters);
    search_animals(&mut app, "lion");
    assert!(app.filtered_animals.iter().any(|a| a.name == "African Lion"));

    let pages = filter::page_count(7, 5);
    assert_eq!(pages, 2);
    assert_eq!(filter::paginate(&app.animals, 2, 5).len(), 2);
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_favorites_and_preferences_survive_restart() {
    let dir = temp_dir();
    {
        let mut store = FileStore::open(dir.clone()).unwrap();
        let mut app = App::from_store(&store);
        dispatch(&mut app, &mut store, Action::ToggleFavorite("3".to_string()));
        dispatch(&mut app, &mut store, Action::ToggleFavorite("1".to_string()));
        dispatch(&mut app, &mut store, Action::ToggleFavorite("1".to_string()));
        dispatch(
            &mut app,
            &mut store,
            Action::SetPreferences(PreferencesPatch::theme(Theme::Light)),
        );
        dispatch(&mut app, &mut store, Action::RecordSearch("tiger".to_string()));
    }

    let store = FileStore::open(dir.clone()).unwrap();
    let app = App::from_store(&store);
    assert!(app.is_favorite("3"));
    assert!(!app.is_favorite("1"));
    assert_eq!(app.favorites.len(), 1);
    assert_eq!(app.preferences.theme, Theme::Light);
    assert!(app.preferences.auto_play);
    assert_eq!(app.recent_searches.entries(), &["tiger"]);

    let _ = std::fs::remove_dir_all(dir);
}

// ============================================================================
// Slider
// ============================================================================

#[test]
fn test_slider_wraps_and_settles() {
    let settings = SliderSettings {
        auto_play: false,
        ..Default::default()
    };
    let mut slider = SliderController::new(7, settings);
    let start = Instant::now();

    assert!(slider.handle_key(SliderKey::Left, start));
    assert_eq!(slider.current_index(), 6);

    // Ignored until the transition ends
    assert!(!slider.next(start));
    let settled = start + settings.transition_duration;
    assert!(slider.tick(settled));

    assert!(slider.next(settled));
    assert_eq!(slider.current_index(), 0);
    slider.teardown();
    assert!(!slider.has_pending_timers());
}
