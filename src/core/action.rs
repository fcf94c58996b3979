//! # Actions
//!
//! Everything that can happen to the showcase becomes an `Action`.
//! User toggles a favorite? That's `Action::ToggleFavorite(id)`.
//! Catalogue finishes loading? That's `Action::SetAnimals(records)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must run.
//! No side effects here: storage writes happen in `core::persist`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! `SetSearchTerm` and `SetFilters` only record criteria. Recomputing the
//! visible list is a second step: run the filter engine and dispatch
//! `SetFilteredAnimals`. [`search_animals`] and [`filter_animals`] do both.

use log::debug;

use crate::core::animal::AnimalRecord;
use crate::core::error::AppError;
use crate::core::filter::{self, FilterCriteria};
use crate::core::preferences::{PreferenceKey, PreferencesPatch};
use crate::core::state::{App, Breadcrumb};
use crate::core::stats::AnimalStats;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetLoading(bool),
    SetError(Option<AppError>),
    SetAnimals(Vec<AnimalRecord>),
    SetFilteredAnimals(Vec<AnimalRecord>),
    SetCurrentAnimal(Option<String>),
    SetSearchTerm(String),
    SetFilters(FilterCriteria),
    AddFavorite(String),
    RemoveFavorite(String),
    ToggleFavorite(String),
    SetPreferences(PreferencesPatch),
    SetStats(AnimalStats),
    SetCurrentPage(usize),
    SetBreadcrumbs(Vec<Breadcrumb>),
    ResetFilters,
    RecordSearch(String),
    Quit,
}

/// I/O the caller must perform after `update()` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    PersistFavorites,
    PersistPreferences(Vec<PreferenceKey>),
    PersistRecentSearches,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetLoading(loading) => {
            app.loading = loading;
            Effect::None
        }
        Action::SetError(error) => {
            app.error = error;
            app.loading = false;
            Effect::None
        }
        Action::SetAnimals(animals) => {
            app.stats = Some(AnimalStats::from_animals(&animals));
            app.filtered_animals = animals.clone();
            app.animals = animals;
            Effect::None
        }
        Action::SetFilteredAnimals(animals) => {
            app.filtered_animals = animals;
            Effect::None
        }
        Action::SetCurrentAnimal(id) => {
            app.current_animal = id;
            Effect::None
        }
        Action::SetSearchTerm(term) => {
            app.search_term = term;
            Effect::None
        }
        Action::SetFilters(patch) => {
            app.filters.merge(patch);
            Effect::None
        }
        Action::AddFavorite(id) => {
            app.favorites.add(&id);
            Effect::PersistFavorites
        }
        Action::RemoveFavorite(id) => {
            app.favorites.remove(&id);
            Effect::PersistFavorites
        }
        Action::ToggleFavorite(id) => {
            let now_favorite = app.favorites.toggle(&id);
            debug!("Favorite {} -> {}", id, now_favorite);
            Effect::PersistFavorites
        }
        Action::SetPreferences(patch) => {
            let touched = app.preferences.apply(patch);
            if touched.is_empty() {
                Effect::None
            } else {
                Effect::PersistPreferences(touched)
            }
        }
        Action::SetStats(stats) => {
            app.stats = Some(stats);
            Effect::None
        }
        Action::SetCurrentPage(page) => {
            app.current_page = page;
            Effect::None
        }
        Action::SetBreadcrumbs(breadcrumbs) => {
            app.breadcrumbs = breadcrumbs;
            Effect::None
        }
        Action::ResetFilters => {
            app.filters = FilterCriteria::default();
            app.search_term.clear();
            app.filtered_animals = app.animals.clone();
            Effect::None
        }
        Action::RecordSearch(term) => {
            if app.recent_searches.record(&term) {
                Effect::PersistRecentSearches
            } else {
                Effect::None
            }
        }
        Action::Quit => Effect::Quit,
    }
}

/// Records `term`, then recomputes the view against the current state.
pub fn search_animals(app: &mut App, term: &str) {
    update(app, Action::SetSearchTerm(term.to_string()));
    let filtered = filter::filter(&app.animals, &app.active_criteria());
    update(app, Action::SetFilteredAnimals(filtered));
}

/// Merges `patch` into the filters, then recomputes the view.
pub fn filter_animals(app: &mut App, patch: FilterCriteria) {
    update(app, Action::SetFilters(patch));
    let filtered = filter::filter(&app.animals, &app.active_criteria());
    update(app, Action::SetFilteredAnimals(filtered));
}

/// Replaces the whole filter set (fields absent from `criteria` are
/// cleared) while keeping the search term, then recomputes the view.
pub fn replace_filters(app: &mut App, criteria: FilterCriteria) {
    let term = std::mem::take(&mut app.search_term);
    update(app, Action::ResetFilters);
    update(app, Action::SetSearchTerm(term));
    filter_animals(app, criteria);
}
