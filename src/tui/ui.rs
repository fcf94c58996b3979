use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::animal::{AnimalRecord, ConservationStatus};
use crate::core::filter::{self, DEFAULT_SIMILAR_LIMIT};
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    AnimalList, DetailView, FilterPicker, SEARCH_BOX_HEIGHT, SliderView, StatusKind, TitleBar,
};
use crate::tui::theme::Palette;
use crate::tui::{TuiState, View};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const KEY_HELP: &str =
    " Tab Views  / Search  o Filters  x Reset  f Favorite  t Theme  a Autoplay  r Reload  q Quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    use Constraint::{Length, Min};
    let palette = Palette::for_theme(app.preferences.theme);
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let (status, status_kind) = status_line(app, tui.spinner_frame);
    let mut title_bar = TitleBar::new(
        app.breadcrumbs.iter().map(|b| b.label.clone()).collect(),
        app.favorites.len(),
        status,
        status_kind,
        palette,
    );
    title_bar.render(frame, title_area);

    if app.loading && app.animals.is_empty() {
        draw_loading(frame, main_area, palette, tui.spinner_frame);
    } else {
        match tui.view {
            View::Slider => draw_slider(frame, main_area, app, tui, palette, now),
            View::Browse => draw_browse(frame, main_area, app, tui, palette),
            View::Favorites => draw_favorites(frame, main_area, app, tui, palette),
            View::Detail => draw_detail(frame, main_area, app, tui, palette),
        }
    }

    frame.render_widget(Span::styled(KEY_HELP, palette.muted()), help_area);

    if let Some(ref mut picker) = tui.filter_picker {
        let area = frame.area();
        FilterPicker::new(picker, palette).render(frame, area);
    }
}

/// Title bar status: loading beats error beats the filter summary.
fn status_line(app: &App, spinner_frame: usize) -> (String, StatusKind) {
    if app.loading {
        let spinner = SPINNER[spinner_frame % SPINNER.len()];
        return (format!("{spinner} Loading animals"), StatusKind::Busy);
    }
    if let Some(ref error) = app.error {
        return (error.to_string(), StatusKind::Error);
    }
    let criteria = app.active_criteria();
    if !criteria.is_empty() {
        return (
            format!(
                "{} · {} of {} shown",
                criteria.summary(),
                app.filtered_animals.len(),
                app.animals.len()
            ),
            StatusKind::Info,
        );
    }
    match app.stats {
        Some(ref stats) => (
            format!(
                "{} animals · {} threatened",
                stats.total_animals,
                stats.at_risk(ConservationStatus::Vulnerable)
            ),
            StatusKind::Info,
        ),
        None => (String::new(), StatusKind::Info),
    }
}

fn draw_loading(frame: &mut Frame, area: Rect, palette: Palette, spinner_frame: usize) {
    let spinner = SPINNER[spinner_frame % SPINNER.len()];
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    let text = Paragraph::new(format!("{spinner} Loading animals..."))
        .style(palette.heading())
        .alignment(Alignment::Center);
    frame.render_widget(text, middle);
}

fn draw_slider(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &TuiState,
    palette: Palette,
    now: Instant,
) {
    let index = tui.slider.current_index();
    let animal = app.filtered_animals.get(index);
    let progress = if tui.slider.settings().show_progress_bar {
        tui.slider.progress(now)
    } else {
        None
    };
    let mut view = SliderView {
        animal,
        state: tui.slider.state(),
        phase: tui.slider.phase(),
        item_count: app.filtered_animals.len(),
        is_favorite: animal.is_some_and(|a| app.is_favorite(&a.id)),
        progress,
        palette,
    };
    view.render(frame, area);
}

fn draw_browse(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, palette: Palette) {
    use Constraint::{Length, Min};
    let [search_area, hint_area, list_area] =
        Layout::vertical([Length(SEARCH_BOX_HEIGHT), Length(1), Min(0)]).areas(area);

    tui.search_box.palette = palette;
    tui.search_box.render(frame, search_area);
    frame.render_widget(search_hint(app, &tui.search_box.buffer, palette), hint_area);

    let per_page = tui.per_page;
    let page = filter::paginate(&app.filtered_animals, app.current_page, per_page);
    AnimalList::new(
        &mut tui.browse,
        "Browse",
        page,
        &app.favorites,
        app.current_page,
        filter::page_count(app.filtered_animals.len(), per_page),
        app.filtered_animals.len(),
        "No animals match. Press x to reset filters.",
        palette,
    )
    .render(frame, list_area);
}

/// Suggestions while typing, recent searches otherwise.
fn search_hint<'a>(app: &App, query: &str, palette: Palette) -> Line<'a> {
    let (label, items): (&str, Vec<String>) = if query.trim().is_empty() {
        (
            " Recent: ",
            app.recent_searches.entries().to_vec(),
        )
    } else {
        (
            " Suggestions: ",
            filter::suggestions(&app.animals, query)
                .iter()
                .map(|s| s.title().to_string())
                .collect(),
        )
    };
    if items.is_empty() {
        return Line::from("");
    }
    Line::from(vec![
        Span::styled(label, palette.muted()),
        Span::styled(items.join(" · "), palette.text()),
    ])
}

fn draw_favorites(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, palette: Palette) {
    let favorites: Vec<AnimalRecord> = app.favorite_animals().into_iter().cloned().collect();
    let per_page = tui.per_page;
    let page_count = filter::page_count(favorites.len(), per_page);
    tui.favorites_page = tui.favorites_page.clamp(1, page_count);
    let page = filter::paginate(&favorites, tui.favorites_page, per_page);
    AnimalList::new(
        &mut tui.favorites,
        "Favorites",
        page,
        &app.favorites,
        tui.favorites_page,
        page_count,
        favorites.len(),
        "No favorites yet. Press f on any animal to add it.",
        palette,
    )
    .render(frame, area);
}

fn draw_detail(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, palette: Palette) {
    let Some(animal) = app.selected_animal() else {
        let empty = Paragraph::new("No animal selected.")
            .style(palette.muted())
            .alignment(Alignment::Center)
            .block(Block::bordered().border_type(BorderType::Rounded));
        frame.render_widget(empty, area);
        return;
    };
    let similar = filter::similar(&app.animals, animal, DEFAULT_SIMILAR_LIMIT);
    DetailView::new(
        &mut tui.detail,
        animal,
        &similar,
        app.is_favorite(&animal.id),
        palette,
    )
    .render(frame, area);
}
