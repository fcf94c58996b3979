//! # Filter Picker Component
//!
//! Centered overlay for choosing category, conservation status and continent.
//! Opened with `o`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FilterPickerState` lives in `TuiState` while the overlay is open
//! - `FilterPicker` is created each frame with borrowed state
//!
//! Each row cycles through "Any" plus the known values with ←/→. Enter emits
//! the full selection; the caller replaces the active filters with it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::animal::{Category, ConservationStatus};
use crate::core::filter::FilterCriteria;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

const ROWS: usize = 3;
const ANY: &str = "Any";

/// Persistent state for the filter picker overlay.
pub struct FilterPickerState {
    continents: Vec<String>,
    /// 0 = Any, otherwise 1-based into the value list for that row
    category: usize,
    status: usize,
    continent: usize,
    pub selected_row: usize,
    pub list_state: ListState,
}

/// Events emitted by the filter picker.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPickerEvent {
    Apply(FilterCriteria),
    Dismiss,
}

fn position_of<T: PartialEq>(values: &[T], current: Option<&T>) -> usize {
    current
        .and_then(|c| values.iter().position(|v| v == c))
        .map(|i| i + 1)
        .unwrap_or(0)
}

fn step(index: usize, len: usize, forward: bool) -> usize {
    // len values plus "Any"
    let slots = len + 1;
    if forward {
        (index + 1) % slots
    } else {
        (index + slots - 1) % slots
    }
}

impl FilterPickerState {
    /// Opens the picker with `current` preselected. `continents` are the
    /// values present in the catalogue.
    pub fn new(current: &FilterCriteria, continents: Vec<String>) -> Self {
        let category = position_of(&Category::ALL, current.category.as_ref());
        let status = position_of(&ConservationStatus::ALL, current.conservation_status.as_ref());
        let continent = current
            .continent
            .as_ref()
            .and_then(|c| continents.iter().position(|v| v.eq_ignore_ascii_case(c)))
            .map(|i| i + 1)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            continents,
            category,
            status,
            continent,
            selected_row: 0,
            list_state,
        }
    }

    /// The criteria the picker currently shows. Never carries a search term.
    pub fn selection(&self) -> FilterCriteria {
        FilterCriteria {
            category: self.category.checked_sub(1).map(|i| Category::ALL[i]),
            conservation_status: self.status.checked_sub(1).map(|i| ConservationStatus::ALL[i]),
            continent: self
                .continent
                .checked_sub(1)
                .and_then(|i| self.continents.get(i).cloned()),
            search_term: None,
        }
    }

    fn cycle(&mut self, forward: bool) {
        match self.selected_row {
            0 => self.category = step(self.category, Category::ALL.len(), forward),
            1 => self.status = step(self.status, ConservationStatus::ALL.len(), forward),
            _ => self.continent = step(self.continent, self.continents.len(), forward),
        }
    }

    /// Handle a key event, returning a FilterPickerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<FilterPickerEvent> {
        match event {
            TuiEvent::Escape => Some(FilterPickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected_row = self.selected_row.saturating_sub(1);
                self.list_state.select(Some(self.selected_row));
                None
            }
            TuiEvent::CursorDown => {
                self.selected_row = (self.selected_row + 1).min(ROWS - 1);
                self.list_state.select(Some(self.selected_row));
                None
            }
            TuiEvent::CursorLeft => {
                self.cycle(false);
                None
            }
            TuiEvent::CursorRight | TuiEvent::InputChar(' ') => {
                self.cycle(true);
                None
            }
            TuiEvent::Submit => Some(FilterPickerEvent::Apply(self.selection())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the filter picker overlay.
pub struct FilterPicker<'a> {
    state: &'a mut FilterPickerState,
    palette: Palette,
}

impl<'a> FilterPicker<'a> {
    pub fn new(state: &'a mut FilterPickerState, palette: Palette) -> Self {
        Self { state, palette }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 40, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .title(" Filters ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Row  ←→ Change  Enter Apply  Esc Back ").centered())
            .padding(Padding::uniform(1));

        let selection = self.state.selection();
        let rows = [
            ("Category", selection.category.map(|c| c.label().to_string())),
            (
                "Status",
                selection.conservation_status.map(|s| s.label().to_string()),
            ),
            ("Continent", selection.continent.clone()),
        ];

        let items: Vec<ListItem> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let value = value.unwrap_or_else(|| ANY.to_string());
                let style = if i == self.state.selected_row {
                    self.palette.selected()
                } else {
                    self.palette.text()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{label:<10}"), style),
                    Span::styled(format!(" ◀ {value} ▶"), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::preferences::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn continents() -> Vec<String> {
        vec!["Africa".to_string(), "Asia".to_string(), "Europe".to_string()]
    }

    #[test]
    fn test_opens_with_current_filters() {
        let current = FilterCriteria {
            category: Some(Category::Mammal),
            continent: Some("asia".to_string()),
            ..Default::default()
        };
        let picker = FilterPickerState::new(&current, continents());
        let selection = picker.selection();
        assert_eq!(selection.category, Some(Category::Mammal));
        assert_eq!(selection.conservation_status, None);
        assert_eq!(selection.continent.as_deref(), Some("Asia"));
    }

    #[test]
    fn test_cycle_wraps_through_any() {
        let mut picker = FilterPickerState::new(&FilterCriteria::default(), continents());
        picker.handle_event(&TuiEvent::CursorDown);
        picker.handle_event(&TuiEvent::CursorDown);
        picker.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(picker.selection().continent.as_deref(), Some("Europe"));
        picker.handle_event(&TuiEvent::CursorRight);
        assert_eq!(picker.selection().continent, None);
    }

    #[test]
    fn test_submit_and_dismiss() {
        let mut picker = FilterPickerState::new(&FilterCriteria::default(), continents());
        picker.handle_event(&TuiEvent::CursorDown);
        picker.handle_event(&TuiEvent::CursorRight);
        match picker.handle_event(&TuiEvent::Submit) {
            Some(FilterPickerEvent::Apply(criteria)) => {
                assert_eq!(criteria.conservation_status, Some(ConservationStatus::LeastConcern));
                assert!(criteria.search_term.is_none());
            }
            other => panic!("Expected Apply, got {other:?}"),
        }
        assert_eq!(picker.handle_event(&TuiEvent::Escape), Some(FilterPickerEvent::Dismiss));
    }

    #[test]
    fn test_render_lists_rows() {
        let mut state = FilterPickerState::new(&FilterCriteria::default(), continents());
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                FilterPicker::new(&mut state, Palette::for_theme(Theme::Dark)).render(f, area);
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Category"));
        assert!(text.contains("Continent"));
        assert!(text.contains("Any"));
    }
}
