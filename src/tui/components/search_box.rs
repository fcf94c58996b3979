//! # SearchBox Component
//!
//! Single-line text input for the Browse view.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace, delete, cursor movement)
//! - Emit `Changed` on every edit so the list can filter live
//! - Emit `Submit` on Enter so the term is recorded in recent searches
//! - Emit `Dismiss` on Esc to hand focus back to the list
//!
//! The buffer is internal state. `focused` is a prop from `TuiState`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

/// Borders + one column of padding each side.
const HORIZONTAL_OVERHEAD: u16 = 4;
pub const SEARCH_BOX_HEIGHT: u16 = 3;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Text changed; carries the whole buffer.
    Changed(String),
    /// Enter pressed.
    Submit(String),
    /// Esc pressed.
    Dismiss,
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Byte offset of the cursor in `buffer`
    pos: usize,
    /// Whether keystrokes go here (Prop)
    pub focused: bool,
    pub palette: Palette,
}

impl SearchBox {
    pub fn new(palette: Palette) -> Self {
        Self {
            buffer: String::new(),
            pos: 0,
            focused: false,
            palette,
        }
    }

    /// Replace the buffer (e.g. after a reset) and park the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.pos = self.buffer.len();
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;

        // Scroll horizontally so the cursor stays visible
        let before_cursor = &self.buffer[..self.pos];
        let mut start = 0;
        while before_cursor[start..].width() >= inner.max(1) && start < before_cursor.len() {
            start = next_char_boundary(&self.buffer, start);
        }
        let visible = &self.buffer[start..];

        let (title, border) = if self.focused {
            (" Search (Enter to save, Esc to leave) ", self.palette.heading())
        } else {
            (" Search (/ to focus) ", self.palette.border())
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Line::from(title))
            .padding(ratatui::widgets::Padding::horizontal(1));

        let text_style = if self.buffer.is_empty() && !self.focused {
            self.palette.muted()
        } else {
            self.palette.text()
        };
        let shown = if self.buffer.is_empty() && !self.focused {
            "name, habitat, continent, fact..."
        } else {
            visible
        };

        frame.render_widget(Paragraph::new(shown).style(text_style).block(block), area);

        if self.focused {
            let cursor_x = area.x + 2 + self.buffer[start..self.pos].width() as u16;
            frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines become spaces
                let flat = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.pos, &flat);
                self.pos += flat.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(prev..self.pos);
                self.pos = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(self.pos..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.pos = prev_char_boundary(&self.buffer, self.pos);
                None
            }
            TuiEvent::CursorRight => {
                if self.pos < self.buffer.len() {
                    self.pos = next_char_boundary(&self.buffer, self.pos);
                }
                None
            }
            TuiEvent::Home => {
                self.pos = 0;
                None
            }
            TuiEvent::End => {
                self.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(SearchEvent::Submit(self.buffer.clone())),
            TuiEvent::Escape => Some(SearchEvent::Dismiss),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::preferences::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn search_box() -> SearchBox {
        SearchBox::new(Palette::for_theme(Theme::Dark))
    }

    #[test]
    fn test_typing_emits_changed() {
        let mut input = search_box();
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('e')),
            Some(SearchEvent::Changed("e".to_string()))
        );
        input.handle_event(&TuiEvent::InputChar('l'));
        input.handle_event(&TuiEvent::InputChar('k'));
        assert_eq!(input.buffer, "elk");

        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("el".to_string()))
        );
    }

    #[test]
    fn test_backspace_at_start_is_ignored() {
        let mut input = search_box();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_cursor_editing_handles_multibyte() {
        let mut input = search_box();
        input.set_text("km²");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "km");
        input.handle_event(&TuiEvent::Home);
        input.handle_event(&TuiEvent::InputChar('3'));
        assert_eq!(input.buffer, "3km");
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut input = search_box();
        input.set_text("tiger");
        assert_eq!(
            input.handle_event(&TuiEvent::Submit),
            Some(SearchEvent::Submit("tiger".to_string()))
        );
        assert_eq!(input.buffer, "tiger");
        assert_eq!(input.handle_event(&TuiEvent::Escape), Some(SearchEvent::Dismiss));
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = search_box();
        input.handle_event(&TuiEvent::Paste("big\ncat".to_string()));
        assert_eq!(input.buffer, "big cat");
    }

    #[test]
    fn test_render_placeholder_when_unfocused() {
        let backend = TestBackend::new(50, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = search_box();
        terminal
            .draw(|f| {
                let area = f.area();
                input.render(f, area);
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("/ to focus"));
    }
}
