//! # Slider View
//!
//! Home screen: one animal card at a time, driven by `core::slider`.
//!
//! ```text
//! ┌ King of the Savanna ─────────────────────────┐
//! │ African Lion  ♥                              │
//! │ Vulnerable (VU) · Africa                     │
//! │                                              │
//! │ The African lion is ...                      │
//! │                                              │
//! │            ● ○ ○ ○ ○ ○ ○   1/7               │
//! └ ← → Navigate  Space Pause  Enter Details ────┘
//! ▰▰▰▰▰▰▰▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱  (autoplay progress)
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, LineGauge, Paragraph, Wrap};

use crate::core::animal::AnimalRecord;
use crate::core::slider::{Direction, Phase, SliderState};
use crate::tui::component::Component;
use crate::tui::theme::Palette;

const HELP: &str = " ← → Navigate  Space Pause  Enter Details ";
/// Above this many slides the dot row is replaced by a counter only.
const MAX_DOTS: usize = 20;

pub struct SliderView<'a> {
    pub animal: Option<&'a AnimalRecord>,
    pub state: SliderState,
    pub phase: Phase,
    pub item_count: usize,
    pub is_favorite: bool,
    /// Autoplay progress in `[0, 1]`, `None` when autoplay is off or the bar is hidden.
    pub progress: Option<f32>,
    pub palette: Palette,
}

impl SliderView<'_> {
    fn dots(&self) -> String {
        if self.item_count > MAX_DOTS {
            return String::new();
        }
        (0..self.item_count)
            .map(|i| if i == self.state.current_index { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn title(&self) -> String {
        let arrow = match (self.phase, self.state.direction) {
            (Phase::Idle, _) => "",
            (Phase::Transitioning, Direction::Forward) => " »",
            (Phase::Transitioning, Direction::Backward) => " «",
        };
        let paused = if self.state.is_paused { " ⏸" } else { "" };
        match self.animal {
            Some(animal) => format!(" {}{}{} ", animal.title, arrow, paused),
            None => " Slider ".to_string(),
        }
    }
}

impl Component for SliderView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [card_area, progress_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border())
            .title(Line::from(self.title()).style(self.palette.heading()))
            .title_bottom(Line::from(HELP).centered().style(self.palette.muted()));

        let Some(animal) = self.animal else {
            let empty = Paragraph::new("No animals match the current filters.\nPress x to reset.")
                .style(self.palette.muted())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, card_area);
            return;
        };

        let mut name_line = vec![Span::styled(animal.name.clone(), self.palette.heading())];
        if self.is_favorite {
            name_line.push(Span::styled(
                "  ♥",
                Style::default().fg(self.palette.favorite),
            ));
        }

        let status = animal.conservation_status;
        let lines = vec![
            Line::from(name_line),
            Line::from(vec![
                Span::styled(
                    format!("{} ({})", status.label(), status.code()),
                    self.palette.status(status),
                ),
                Span::styled(
                    format!(" · {} · {}", animal.location.continent, animal.category),
                    self.palette.muted(),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(animal.description.clone(), self.palette.text())),
            Line::from(""),
            Line::from(Span::styled(
                format!("Habitat: {}", animal.habitat),
                self.palette.muted(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(self.dots(), self.palette.heading()),
                Span::styled(
                    format!("   {}/{}", self.state.current_index + 1, self.item_count),
                    self.palette.muted(),
                ),
            ])
            .centered(),
        ];

        let card = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(card, card_area);

        if let Some(ratio) = self.progress {
            let gauge = LineGauge::default()
                .ratio(f64::from(ratio).clamp(0.0, 1.0))
                .filled_style(Style::default().fg(self.palette.accent))
                .unfilled_style(self.palette.muted())
                .label("");
            frame.render_widget(gauge, progress_area);
        }
    }
}
