//! # Animal List
//!
//! Paginated list used by both the Browse and Favorites views. The caller
//! passes the already-sliced page; this component only renders it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ListSelection` lives in `TuiState` (one per view)
//! - `AnimalList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::animal::AnimalRecord;
use crate::core::favorites::Favorites;
use crate::tui::theme::Palette;

/// Persistent selection for one list view. `selected` indexes the current page.
#[derive(Debug, Default)]
pub struct ListSelection {
    pub selected: usize,
    pub list_state: ListState,
}

impl ListSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, page_len: usize) {
        if page_len > 0 {
            self.selected = (self.selected + 1).min(page_len - 1);
        }
    }

    /// Keeps the selection inside a page of `page_len` rows.
    pub fn clamp(&mut self, page_len: usize) {
        self.selected = self.selected.min(page_len.saturating_sub(1));
    }
}

pub struct AnimalList<'a> {
    state: &'a mut ListSelection,
    title: &'a str,
    page: &'a [AnimalRecord],
    favorites: &'a Favorites,
    current_page: usize,
    page_count: usize,
    total: usize,
    empty_message: &'a str,
    palette: Palette,
}

impl<'a> AnimalList<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        state: &'a mut ListSelection,
        title: &'a str,
        page: &'a [AnimalRecord],
        favorites: &'a Favorites,
        current_page: usize,
        page_count: usize,
        total: usize,
        empty_message: &'a str,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            title,
            page,
            favorites,
            current_page,
            page_count,
            total,
            empty_message,
            palette,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let footer = format!(
            " Page {}/{} · {} animals  ↑↓ Select  ←→ Page  Enter Details ",
            self.current_page, self.page_count, self.total
        );
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border())
            .title(Line::from(format!(" {} ", self.title)).style(self.palette.heading()))
            .title_bottom(Line::from(footer).centered().style(self.palette.muted()))
            .padding(Padding::horizontal(1));

        if self.page.is_empty() {
            let empty = Paragraph::new(self.empty_message)
                .style(self.palette.muted())
                .centered()
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(self.page.len());
        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding

        let items: Vec<ListItem> = self
            .page
            .iter()
            .enumerate()
            .map(|(i, animal)| {
                let is_selected = i == self.state.selected;
                let heart = if self.favorites.contains(&animal.id) { "♥ " } else { "  " };
                let status = animal.conservation_status;
                let tag = format!("[{}]", status.code());
                let meta = format!("  {} · {}", animal.location.continent, animal.habitat);

                let fixed = heart.width() + tag.width() + 1;
                let name_width = 22.min(inner_width.saturating_sub(fixed));
                let name = pad_to_width(&truncate_to_width(&animal.name, name_width), name_width);
                let meta_width = inner_width.saturating_sub(fixed + name_width);
                let meta = truncate_to_width(&meta, meta_width);

                let base = if is_selected {
                    self.palette.selected()
                } else {
                    self.palette.text()
                };
                let pick = |normal: Style| if is_selected { base } else { normal };

                ListItem::new(Line::from(vec![
                    Span::styled(heart, pick(Style::default().fg(self.palette.favorite))),
                    Span::styled(tag, pick(self.palette.status(status))),
                    Span::styled(" ", base),
                    Span::styled(name, base),
                    Span::styled(meta, pick(self.palette.muted())),
                ]))
            })
            .collect();

        self.state.list_state.select(Some(self.state.selected));
        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate to at most `max_width` display columns, adding "…" if needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalogue::animals;
    use crate::core::preferences::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Cheetah", 10), "Cheetah");
        assert_eq!(truncate_to_width("African Elephant", 8), "African…");
        assert_eq!(truncate_to_width("Lion", 0), "");
    }

    #[test]
    fn test_selection_moves_within_page() {
        let mut selection = ListSelection::new();
        selection.move_down(3);
        selection.move_down(3);
        selection.move_down(3);
        assert_eq!(selection.selected, 2);
        selection.move_up();
        assert_eq!(selection.selected, 1);
        selection.clamp(1);
        assert_eq!(selection.selected, 0);
    }

    #[test]
    fn test_renders_page_with_favorite_marker() {
        let all = animals();
        let mut favorites = Favorites::new();
        favorites.add("2");
        let mut selection = ListSelection::new();

        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                AnimalList::new(
                    &mut selection,
                    "Browse",
                    &all[..5],
                    &favorites,
                    1,
                    2,
                    7,
                    "",
                    Palette::for_theme(Theme::Dark),
                )
                .render(f, area);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("African Lion"));
        assert!(text.contains("[EN]"));
        assert!(text.contains('♥'));
        assert!(text.contains("Page 1/2"));
        assert!(!text.contains("Cheetah"));
    }

    #[test]
    fn test_renders_empty_message() {
        let favorites = Favorites::new();
        let mut selection = ListSelection::new();
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                AnimalList::new(
                    &mut selection,
                    "Favorites",
                    &[],
                    &favorites,
                    1,
                    1,
                    0,
                    "No favorites yet",
                    Palette::for_theme(Theme::Light),
                )
                .render(f, area);
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("No favorites yet"));
    }
}
