//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core operations.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One thread, one event at a time. Each iteration:
//!
//! 1. Sync the slider with the filtered view (length, visibility)
//! 2. Draw if anything changed
//! 3. Wait for a terminal event, no longer than the slider's next deadline
//! 4. Handle every pending terminal event
//! 5. Drain actions sent by the background load task
//! 6. Fire due slider timers
//!
//! ## Redraw Strategy
//!
//! - **Animating** (loading spinner, autoplay progress bar): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms or until the next slider deadline, and only
//!   redraws on events, timer firings or background actions.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::Path;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, replace_filters, search_animals};
use crate::core::catalogue::{CatalogueSource, StaticCatalogue};
use crate::core::config::ResolvedConfig;
use crate::core::error::ErrorCode;
use crate::core::filter;
use crate::core::loader::{load_catalogue, resolve_animal};
use crate::core::persist::dispatch;
use crate::core::preferences::PreferencesPatch;
use crate::core::slider::{SliderController, SliderKey};
use crate::core::state::{App, Breadcrumb};
use crate::core::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DetailState, FilterPickerEvent, FilterPickerState, ListSelection, SearchBox, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Palette;

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// Top-level screens. Tab cycles Slider → Browse → Favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Slider,
    Browse,
    Favorites,
    Detail,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Slider => "Slider",
            View::Browse => "Browse",
            View::Favorites => "Favorites",
            View::Detail => "Detail",
        }
    }

    fn path(&self) -> &'static str {
        match self {
            View::Slider => "/",
            View::Browse => "/browse",
            View::Favorites => "/favorites",
            View::Detail => "/animal",
        }
    }

    pub fn next(self) -> Self {
        match self {
            View::Slider => View::Browse,
            View::Browse => View::Favorites,
            View::Favorites | View::Detail => View::Slider,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            View::Slider | View::Detail => View::Favorites,
            View::Browse => View::Slider,
            View::Favorites => View::Browse,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub view: View,
    /// Where Esc goes back to from the detail view
    pub return_view: View,
    // Persistent component states
    pub search_box: SearchBox,
    pub browse: ListSelection,
    pub favorites: ListSelection,
    pub favorites_page: usize,
    pub detail: DetailState,
    // Filter picker overlay (None = hidden)
    pub filter_picker: Option<FilterPickerState>,
    pub slider: SliderController,
    pub per_page: usize,
    /// `--no-autoplay` for this session, regardless of the stored preference
    pub no_autoplay: bool,
    pub terminal_focused: bool,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig, app: &App) -> Self {
        let mut settings = config.slider;
        settings.auto_play = settings.auto_play && app.preferences.auto_play;
        Self {
            view: View::Slider,
            return_view: View::Slider,
            search_box: SearchBox::new(Palette::for_theme(app.preferences.theme)),
            browse: ListSelection::new(),
            favorites: ListSelection::new(),
            favorites_page: 1,
            detail: DetailState::new(),
            filter_picker: None,
            slider: SliderController::new(app.filtered_animals.len(), settings),
            per_page: config.per_page,
            no_autoplay: config.no_autoplay,
            terminal_focused: true,
            spinner_frame: 0,
        }
    }

    /// Keeps the slider's length and visibility in line with app and view state.
    pub fn sync_slider(&mut self, app: &App, now: Instant) {
        let count = app.filtered_animals.len();
        if self.slider.item_count() != count {
            self.slider.set_item_count(count, now);
        }
        let visible = self.terminal_focused && self.view == View::Slider;
        if self.slider.is_visible() != visible {
            self.slider.set_visible(visible, now);
        }
    }

    /// Whether the autoplay progress bar is on screen and moving.
    fn progress_animating(&self, now: Instant) -> bool {
        self.view == View::Slider
            && self.slider.settings().show_progress_bar
            && self.slider.progress(now).is_some()
    }

    /// Id of the animal the user is "on": current slide, selected row, or the open profile.
    pub fn target_animal_id(&self, app: &App) -> Option<String> {
        match self.view {
            View::Slider => app
                .filtered_animals
                .get(self.slider.current_index())
                .map(|a| a.id.clone()),
            View::Browse => filter::paginate(&app.filtered_animals, app.current_page, self.per_page)
                .get(self.browse.selected)
                .map(|a| a.id.clone()),
            View::Favorites => {
                let favorites = app.favorite_animals();
                filter::paginate(&favorites, self.favorites_page, self.per_page)
                    .get(self.favorites.selected)
                    .map(|a| a.id.clone())
            }
            View::Detail => app.current_animal.clone(),
        }
    }
}

/// Trail shown in the title bar for `view`.
pub fn breadcrumbs_for(view: View, return_view: View, app: &App) -> Vec<Breadcrumb> {
    let mut trail = vec![Breadcrumb::new("Home", "/")];
    match view {
        View::Slider => {}
        View::Browse | View::Favorites => trail.push(Breadcrumb::new(view.label(), view.path())),
        View::Detail => {
            if return_view != View::Slider {
                trail.push(Breadcrumb::new(return_view.label(), return_view.path()));
            }
            if let Some(animal) = app.selected_animal() {
                trail.push(Breadcrumb::new(
                    animal.name.clone(),
                    format!("{}/{}", View::Detail.path(), animal.id),
                ));
            }
        }
    }
    trail
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Focus reporting drives slider visibility
        execute!(stdout(), EnableBracketedPaste, EnableFocusChange)?;
        info!("Terminal modes enabled (bracketed paste, focus change)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableFocusChange, DisableBracketedPaste);
    }
}

/// Opens the file store, falling back to an in-memory store so the app still runs.
fn open_store(dir: &Path) -> Box<dyn KeyValueStore> {
    match FileStore::open(dir) {
        Ok(store) => {
            info!("Using storage directory {}", dir.display());
            Box::new(store)
        }
        Err(e) => {
            warn!(
                "Cannot open storage at {} ({}), preferences will not persist",
                dir.display(),
                e
            );
            Box::new(MemoryStore::new())
        }
    }
}

/// What the event loop should do after a terminal event.
#[derive(Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Continue,
    Reload,
    Quit,
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut store = open_store(&config.storage_dir);
    let mut app = App::from_store(store.as_ref());
    let mut tui = TuiState::new(&config, &app);
    let source: Arc<dyn CatalogueSource> = Arc::new(StaticCatalogue);
    let mut pending_animal = config.initial_animal.clone();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut resolve_handle = None;
    let mut load_handle = Some(spawn_load(
        source.clone(),
        config.load_delay,
        ErrorCode::InitError,
        tx.clone(),
    ));
    let trail = breadcrumbs_for(tui.view, tui.return_view, &app);
    dispatch(&mut app, store.as_mut(), Action::SetBreadcrumbs(trail));

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        tui.sync_slider(&app, now);

        let animating = app.loading || tui.progress_animating(now);
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, otherwise until the next slider deadline
        let mut timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        if let Some(deadline) = tui.slider.next_deadline() {
            timeout = timeout.min(deadline.saturating_duration_since(Instant::now()));
        }
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&event, &mut app, &mut tui, store.as_mut(), Instant::now()) {
                EventOutcome::Continue => {}
                EventOutcome::Reload => {
                    if let Some(handle) = load_handle.take() {
                        handle.abort();
                    }
                    load_handle = Some(spawn_load(
                        source.clone(),
                        config.load_delay,
                        ErrorCode::LoadError,
                        tx.clone(),
                    ));
                }
                EventOutcome::Quit => {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (catalogue loads, --animal lookup)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let loaded = apply_background_action(action, &mut app, &mut tui, store.as_mut());
            if loaded && let Some(id) = pending_animal.take() {
                resolve_handle = Some(spawn_resolve(source.clone(), id, tx.clone()));
            }
        }

        if tui.slider.tick(Instant::now()) {
            needs_redraw = true;
        }
    }

    for handle in [load_handle.take(), resolve_handle.take()].into_iter().flatten() {
        handle.abort();
    }
    tui.slider.teardown();

    ratatui::restore();
    info!("Wildlife showcase shut down");
    Ok(())
}

/// Spawns the catalogue load as a tokio task that reports back over `tx`.
fn spawn_load(
    source: Arc<dyn CatalogueSource>,
    delay: Duration,
    code: ErrorCode,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning catalogue load ({})", code);
    tokio::spawn(async move {
        load_catalogue(source.as_ref(), delay, code, tx).await;
    })
    .abort_handle()
}

/// Spawns the `--animal` lookup; the result arrives as `SetCurrentAnimal` or `SetError`.
fn spawn_resolve(
    source: Arc<dyn CatalogueSource>,
    id: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Resolving requested animal {}", id);
    tokio::spawn(async move {
        resolve_animal(source.as_ref(), id, tx).await;
    })
    .abort_handle()
}

/// Applies one action from a background task. A resolved animal opens the
/// detail view. Returns true when the action replaced the collection.
fn apply_background_action(
    action: Action,
    app: &mut App,
    tui: &mut TuiState,
    store: &mut dyn KeyValueStore,
) -> bool {
    match action {
        Action::SetCurrentAnimal(Some(id)) => {
            open_detail(id, app, tui, store);
            false
        }
        Action::SetAnimals(animals) => {
            dispatch(app, store, Action::SetAnimals(animals));
            on_animals_loaded(app, tui, store);
            true
        }
        other => {
            dispatch(app, store, other);
            false
        }
    }
}

/// Runs after `SetAnimals`: re-applies active criteria and keeps pages in range.
fn on_animals_loaded(app: &mut App, tui: &mut TuiState, store: &mut dyn KeyValueStore) {
    if !app.active_criteria().is_empty() {
        let filtered = filter::filter(&app.animals, &app.active_criteria());
        dispatch(app, store, Action::SetFilteredAnimals(filtered));
    }
    clamp_page(app, tui, store);
    clamp_favorites_page(app, tui);
}

fn clamp_page(app: &mut App, tui: &mut TuiState, store: &mut dyn KeyValueStore) {
    let pages = filter::page_count(app.filtered_animals.len(), tui.per_page);
    if app.current_page > pages || app.current_page == 0 {
        dispatch(app, store, Action::SetCurrentPage(pages.min(app.current_page.max(1))));
    }
}

/// Favorites can shrink under the cursor; keep the page and row inside the list.
fn clamp_favorites_page(app: &App, tui: &mut TuiState) {
    let total = app.favorite_animals().len();
    let pages = filter::page_count(total, tui.per_page);
    tui.favorites_page = tui.favorites_page.clamp(1, pages);
    let page_len = filter::paginate(&app.favorite_animals(), tui.favorites_page, tui.per_page).len();
    tui.favorites.clamp(page_len);
}

fn switch_view(view: View, app: &mut App, tui: &mut TuiState, store: &mut dyn KeyValueStore) {
    if view != View::Detail && tui.view != View::Detail {
        tui.return_view = tui.view;
    }
    debug!("View {} -> {}", tui.view.label(), view.label());
    tui.view = view;
    let trail = breadcrumbs_for(view, tui.return_view, app);
    dispatch(app, store, Action::SetBreadcrumbs(trail));
}

fn open_detail(id: String, app: &mut App, tui: &mut TuiState, store: &mut dyn KeyValueStore) {
    if tui.view != View::Detail {
        tui.return_view = tui.view;
    }
    dispatch(app, store, Action::SetCurrentAnimal(Some(id)));
    tui.detail.reset();
    tui.view = View::Detail;
    let trail = breadcrumbs_for(View::Detail, tui.return_view, app);
    dispatch(app, store, Action::SetBreadcrumbs(trail));
}

/// After any change to search or filters: back to page 1, top row.
fn after_criteria_change(app: &mut App, tui: &mut TuiState, store: &mut dyn KeyValueStore) {
    dispatch(app, store, Action::SetCurrentPage(1));
    tui.browse.selected = 0;
}

/// Routes one terminal event. Pure with respect to the terminal, so it can be
/// driven from tests with a `MemoryStore`.
pub fn handle_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    store: &mut dyn KeyValueStore,
    now: Instant,
) -> EventOutcome {
    // Always handled
    match event {
        TuiEvent::Resize => return EventOutcome::Continue,
        TuiEvent::ForceQuit => return quit(app, store),
        TuiEvent::FocusGained | TuiEvent::FocusLost => {
            tui.terminal_focused = matches!(event, TuiEvent::FocusGained);
            tui.sync_slider(app, now);
            return EventOutcome::Continue;
        }
        _ => {}
    }

    // When the filter picker is open, route all events to it
    if let Some(ref mut picker) = tui.filter_picker {
        if let Some(picker_event) = picker.handle_event(event) {
            if let FilterPickerEvent::Apply(criteria) = picker_event {
                info!("Applying filters: {:?}", criteria);
                replace_filters(app, criteria);
                after_criteria_change(app, tui, store);
            }
            tui.filter_picker = None;
        }
        return EventOutcome::Continue;
    }

    // Focused search box takes keystrokes
    if tui.search_box.focused {
        if let Some(search_event) = tui.search_box.handle_event(event) {
            match search_event {
                SearchEvent::Changed(text) => {
                    search_animals(app, &text);
                    after_criteria_change(app, tui, store);
                }
                SearchEvent::Submit(text) => {
                    search_animals(app, &text);
                    after_criteria_change(app, tui, store);
                    dispatch(app, store, Action::RecordSearch(text));
                    tui.search_box.focused = false;
                }
                SearchEvent::Dismiss => tui.search_box.focused = false,
            }
        }
        return EventOutcome::Continue;
    }

    // Global keys
    match event {
        TuiEvent::InputChar('q') => return quit(app, store),
        TuiEvent::InputChar('r') => return EventOutcome::Reload,
        TuiEvent::NextView => {
            switch_view(tui.view.next(), app, tui, store);
            return EventOutcome::Continue;
        }
        TuiEvent::PrevView => {
            switch_view(tui.view.prev(), app, tui, store);
            return EventOutcome::Continue;
        }
        TuiEvent::InputChar('/') => {
            if tui.view != View::Browse {
                switch_view(View::Browse, app, tui, store);
            }
            tui.search_box.focused = true;
            return EventOutcome::Continue;
        }
        TuiEvent::InputChar('o') => {
            tui.filter_picker = Some(FilterPickerState::new(
                &app.filters,
                filter::continents(&app.animals),
            ));
            return EventOutcome::Continue;
        }
        TuiEvent::InputChar('x') => {
            dispatch(app, store, Action::ResetFilters);
            tui.search_box.set_text("");
            after_criteria_change(app, tui, store);
            return EventOutcome::Continue;
        }
        TuiEvent::InputChar('f') => {
            if let Some(id) = tui.target_animal_id(app) {
                dispatch(app, store, Action::ToggleFavorite(id));
                clamp_favorites_page(app, tui);
            }
            return EventOutcome::Continue;
        }
        TuiEvent::InputChar('t') => {
            let theme = app.preferences.theme.toggled();
            dispatch(app, store, Action::SetPreferences(PreferencesPatch::theme(theme)));
            return EventOutcome::Continue;
        }
        TuiEvent::InputChar('a') => {
            let enabled = !app.preferences.auto_play;
            dispatch(app, store, Action::SetPreferences(PreferencesPatch::auto_play(enabled)));
            tui.slider.set_auto_play(enabled && !tui.no_autoplay, now);
            return EventOutcome::Continue;
        }
        _ => {}
    }

    match tui.view {
        View::Slider => handle_slider_event(event, app, tui, store, now),
        View::Browse => handle_browse_event(event, app, tui, store),
        View::Favorites => handle_favorites_event(event, app, tui, store),
        View::Detail => {
            if matches!(event, TuiEvent::Escape | TuiEvent::Backspace) {
                let back = tui.return_view;
                switch_view(back, app, tui, store);
            } else {
                tui.detail.handle_event(event);
            }
        }
    }
    EventOutcome::Continue
}

fn quit(app: &mut App, store: &mut dyn KeyValueStore) -> EventOutcome {
    if dispatch(app, store, Action::Quit) == Effect::Quit {
        EventOutcome::Quit
    } else {
        EventOutcome::Continue
    }
}

fn handle_slider_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    store: &mut dyn KeyValueStore,
    now: Instant,
) {
    let key = match event {
        TuiEvent::CursorLeft => SliderKey::Left,
        TuiEvent::CursorRight => SliderKey::Right,
        TuiEvent::InputChar(' ') => SliderKey::Space,
        TuiEvent::Home => SliderKey::Home,
        TuiEvent::End => SliderKey::End,
        TuiEvent::Submit => {
            if let Some(id) = tui.target_animal_id(app) {
                open_detail(id, app, tui, store);
            }
            return;
        }
        _ => return,
    };
    tui.slider.handle_key(key, now);
}

fn handle_browse_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    store: &mut dyn KeyValueStore,
) {
    let pages = filter::page_count(app.filtered_animals.len(), tui.per_page);
    let page_len = filter::paginate(&app.filtered_animals, app.current_page, tui.per_page).len();
    match event {
        TuiEvent::CursorUp => tui.browse.move_up(),
        TuiEvent::CursorDown => tui.browse.move_down(page_len),
        TuiEvent::CursorLeft | TuiEvent::PageUp if app.current_page > 1 => {
            dispatch(app, store, Action::SetCurrentPage(app.current_page - 1));
            tui.browse.selected = 0;
        }
        TuiEvent::CursorRight | TuiEvent::PageDown if app.current_page < pages => {
            dispatch(app, store, Action::SetCurrentPage(app.current_page + 1));
            tui.browse.selected = 0;
        }
        TuiEvent::Submit => {
            if let Some(id) = tui.target_animal_id(app) {
                open_detail(id, app, tui, store);
            }
        }
        _ => {}
    }
}

fn handle_favorites_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    store: &mut dyn KeyValueStore,
) {
    let total = app.favorite_animals().len();
    let pages = filter::page_count(total, tui.per_page);
    let page_len = total
        .saturating_sub((tui.favorites_page - 1) * tui.per_page)
        .min(tui.per_page);
    match event {
        TuiEvent::CursorUp => tui.favorites.move_up(),
        TuiEvent::CursorDown => tui.favorites.move_down(page_len),
        TuiEvent::CursorLeft | TuiEvent::PageUp if tui.favorites_page > 1 => {
            tui.favorites_page -= 1;
            tui.favorites.selected = 0;
        }
        TuiEvent::CursorRight | TuiEvent::PageDown if tui.favorites_page < pages => {
            tui.favorites_page += 1;
            tui.favorites.selected = 0;
        }
        TuiEvent::Submit => {
            if let Some(id) = tui.target_animal_id(app) {
                open_detail(id, app, tui, store);
            }
        }
        _ => {}
    }
}

/// TuiState built from default config, for tests.
#[cfg(test)]
pub(crate) fn test_tui(app: &App) -> TuiState {
    use crate::core::config::{CliOverrides, WildlifeConfig, resolve_with_env};
    let config = resolve_with_env(&WildlifeConfig::default(), &CliOverrides::default(), |_| None);
    TuiState::new(&config, app)
}
