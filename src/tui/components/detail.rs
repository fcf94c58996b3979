//! # Detail View
//!
//! Full profile of one animal: identity, conservation status, location,
//! physical characteristics, behaviour, facts, threats, and up to three
//! similar animals. Content is taller than most terminals, so it is laid out
//! on a `tui_scrollview` canvas.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DetailState` lives in `TuiState` (scroll offset)
//! - `DetailView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::animal::AnimalRecord;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

/// Persistent scroll state for the detail view.
#[derive(Default)]
pub struct DetailState {
    pub scroll_state: ScrollViewState,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, used when a different animal is opened.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for DetailState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::Home => self.scroll_state.scroll_to_top(),
            TuiEvent::End => self.scroll_state.scroll_to_bottom(),
            _ => return None,
        }
        Some(())
    }
}

pub struct DetailView<'a> {
    state: &'a mut DetailState,
    animal: &'a AnimalRecord,
    similar: &'a [AnimalRecord],
    is_favorite: bool,
    palette: Palette,
}

impl<'a> DetailView<'a> {
    pub fn new(
        state: &'a mut DetailState,
        animal: &'a AnimalRecord,
        similar: &'a [AnimalRecord],
        is_favorite: bool,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            animal,
            similar,
            is_favorite,
            palette,
        }
    }

    fn section(&self, lines: &mut Vec<Line<'static>>, title: &str) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(title.to_string(), self.palette.heading())));
    }

    fn field(&self, lines: &mut Vec<Line<'static>>, label: &str, value: &str) {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<12}"), self.palette.muted()),
            Span::styled(value.to_string(), self.palette.text()),
        ]));
    }

    /// Bulleted, hanging-indent wrapped list.
    fn bullets(&self, lines: &mut Vec<Line<'static>>, items: &[String], width: usize) {
        let options = textwrap::Options::new(width.max(8))
            .initial_indent("  • ")
            .subsequent_indent("    ");
        for item in items {
            for wrapped in textwrap::wrap(item, &options) {
                lines.push(Line::from(Span::styled(wrapped.into_owned(), self.palette.text())));
            }
        }
    }

    fn paragraph(&self, lines: &mut Vec<Line<'static>>, text: &str, width: usize) {
        for wrapped in textwrap::wrap(text, width.max(8)) {
            lines.push(Line::from(Span::styled(wrapped.into_owned(), self.palette.text())));
        }
    }

    fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let a = self.animal;
        let mut lines = Vec::new();

        let mut name = vec![Span::styled(a.name.clone(), self.palette.heading())];
        if self.is_favorite {
            name.push(Span::styled("  ♥ favorite", Style::default().fg(self.palette.favorite)));
        }
        lines.push(Line::from(name));
        lines.push(Line::from(Span::styled(
            format!("{} · {} · by {}", a.title, a.topic, a.author),
            self.palette.muted(),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ({})", a.conservation_status.label(), a.conservation_status.code()),
                self.palette.status(a.conservation_status),
            ),
            Span::styled(format!(" · {}", a.category), self.palette.muted()),
        ]));
        lines.push(Line::from(""));
        self.paragraph(&mut lines, &a.description, width);

        self.section(&mut lines, "Location");
        self.field(&mut lines, "Continent", &a.location.continent);
        self.field(&mut lines, "Countries", &a.location.countries.join(", "));
        self.field(&mut lines, "Habitat", &a.habitat);
        if let Some(c) = a.location.coordinates {
            self.field(&mut lines, "Coordinates", &format!("{:.1}, {:.1}", c.lat, c.lng));
        }

        self.section(&mut lines, "Physical");
        self.field(&mut lines, "Weight", &a.physical.weight);
        self.field(&mut lines, "Height", &a.physical.height);
        if let Some(ref length) = a.physical.length {
            self.field(&mut lines, "Length", length);
        }
        self.field(&mut lines, "Lifespan", &a.physical.lifespan);

        self.section(&mut lines, "Behavior");
        self.field(&mut lines, "Diet", &a.behavior.diet);
        self.field(&mut lines, "Social", &a.behavior.social_structure);
        self.field(&mut lines, "Activity", &a.behavior.activity_pattern);

        self.section(&mut lines, "Facts");
        self.bullets(&mut lines, &a.facts, width);

        self.section(&mut lines, "Threats");
        self.bullets(&mut lines, &a.threats, width);

        self.section(&mut lines, "Similar animals");
        if self.similar.is_empty() {
            lines.push(Line::from(Span::styled("  None in the catalogue", self.palette.muted())));
        }
        for other in self.similar {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", other.name), self.palette.text()),
                Span::styled(
                    format!("  {} · {}", other.location.continent, other.conservation_status.code()),
                    self.palette.muted(),
                ),
            ]));
        }

        lines
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border())
            .title(Line::from(format!(" {} ", self.animal.name)).style(self.palette.heading()))
            .title_bottom(
                Line::from(" ↑↓ Scroll  f Favorite  Esc Back ")
                    .centered()
                    .style(self.palette.muted()),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // One column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let lines = self.build_lines(content_width as usize);
        let height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
