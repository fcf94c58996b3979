//! Colour palette for the two stored themes.

use ratatui::style::{Color, Modifier, Style};

use crate::core::animal::ConservationStatus;
use crate::core::preferences::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub favorite: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color::Gray,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                favorite: Color::LightRed,
                error: Color::Red,
            },
            Theme::Light => Self {
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
                favorite: Color::Magenta,
                error: Color::Red,
            },
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Green for safe, yellow through red as risk rises.
    pub fn status(&self, status: ConservationStatus) -> Style {
        let color = match status {
            ConservationStatus::LeastConcern => Color::Green,
            ConservationStatus::NearThreatened => Color::LightGreen,
            ConservationStatus::Vulnerable => Color::Yellow,
            ConservationStatus::Endangered => Color::LightRed,
            ConservationStatus::CriticallyEndangered => Color::Red,
            ConservationStatus::ExtinctInWild | ConservationStatus::Extinct => Color::DarkGray,
        };
        Style::default().fg(color)
    }
}
