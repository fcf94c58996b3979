//! # TitleBar Component
//!
//! Top status bar: breadcrumb trail, favorites count and the current status
//! (loading, last error, or the active filters).
//!
//! Purely presentational. All three props come from different places:
//! `breadcrumbs` and `favorites_count` from core `App`, `status` computed by
//! the caller from loading/error/filter state. The TitleBar just renders
//! what it's given.
//!
//! ```text
//! Wildlife Showcase │ Home › Browse › Bengal Tiger │ ♥ 2 │ Loading...
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub const APP_TITLE: &str = "Wildlife Showcase";
const SEPARATOR: &str = " │ ";

/// How the status segment should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Busy,
    Error,
}

pub struct TitleBar {
    pub breadcrumbs: Vec<String>,
    pub favorites_count: usize,
    pub status: String,
    pub status_kind: StatusKind,
    pub palette: Palette,
}

impl TitleBar {
    pub fn new(
        breadcrumbs: Vec<String>,
        favorites_count: usize,
        status: String,
        status_kind: StatusKind,
        palette: Palette,
    ) -> Self {
        Self {
            breadcrumbs,
            favorites_count,
            status,
            status_kind,
            palette,
        }
    }

    fn status_style(&self) -> ratatui::style::Style {
        match self.status_kind {
            StatusKind::Info => self.palette.muted(),
            StatusKind::Busy => self.palette.heading(),
            StatusKind::Error => ratatui::style::Style::default().fg(self.palette.error),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(APP_TITLE, self.palette.heading())];

        if !self.breadcrumbs.is_empty() {
            spans.push(Span::styled(SEPARATOR, self.palette.muted()));
            spans.push(Span::styled(self.breadcrumbs.join(" › "), self.palette.text()));
        }

        spans.push(Span::styled(SEPARATOR, self.palette.muted()));
        spans.push(Span::styled(
            format!("♥ {}", self.favorites_count),
            ratatui::style::Style::default().fg(self.palette.favorite),
        ));

        if !self.status.is_empty() {
            spans.push(Span::styled(SEPARATOR, self.palette.muted()));
            spans.push(Span::styled(self.status.clone(), self.status_style()));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
