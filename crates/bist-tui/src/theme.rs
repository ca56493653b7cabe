//! Colour palette and text styles
//!
//! Dark terminal palette with market colours:
//! - **Accent**: blue (titles, focus, badges)
//! - **Positive**: emerald (up trends, buy signals)
//! - **Negative**: rose (down trends, sell signals)
//! - **Muted**: slate (neutral trends, hints, secondary text)
//! - **Warning**: amber (tips, disclaimers)

use bist_stock::{Direction, Signal};
use ratatui::style::{Color, Modifier, Style};

/// Palette of the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

/// Palette used by the free style functions of this module
pub const PALETTE: Theme = Theme::slate();

impl Theme {
    /// Slate text with emerald/rose market colours
    pub const fn slate() -> Self {
        Self {
            accent: Color::Rgb(59, 130, 246),
            positive: Color::Rgb(16, 185, 129),
            negative: Color::Rgb(244, 63, 94),
            warning: Color::Rgb(245, 158, 11),
            muted: Color::Rgb(148, 163, 184),
            text_primary: Color::White,
            text_secondary: Color::Rgb(203, 213, 225),
        }
    }

    /// Colour for a predicted direction
    pub fn trend_color(&self, direction: Direction) -> Color {
        match direction {
            Direction::Up => self.positive,
            Direction::Down => self.negative,
            Direction::Neutral => self.muted,
        }
    }

    /// Colour for an indicator signal
    pub fn signal_color(&self, signal: Signal) -> Color {
        match signal {
            Signal::Buy => self.positive,
            Signal::Sell => self.negative,
            Signal::Neutral => self.muted,
        }
    }
}

/// Icon for a predicted direction
pub fn trend_icon(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "▲",
        Direction::Down => "▼",
        Direction::Neutral => "─",
    }
}

pub fn accent() -> Style {
    Style::default().fg(PALETTE.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(PALETTE.muted)
}

pub fn warning() -> Style {
    Style::default().fg(PALETTE.warning)
}

pub fn negative() -> Style {
    Style::default().fg(PALETTE.negative)
}

pub fn text() -> Style {
    Style::default().fg(PALETTE.text_primary)
}

pub fn text_secondary() -> Style {
    Style::default().fg(PALETTE.text_secondary)
}

pub fn heading() -> Style {
    text().add_modifier(Modifier::BOLD)
}

/// Highlighted row in a list
pub fn selected() -> Style {
    accent().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

pub fn trend(direction: Direction) -> Style {
    Style::default().fg(PALETTE.trend_color(direction))
}

pub fn signal(signal: Signal) -> Style {
    Style::default()
        .fg(PALETTE.signal_color(signal))
        .add_modifier(Modifier::BOLD)
}

/// Border of a framed section
pub fn border(focused: bool) -> Style {
    if focused { accent() } else { muted() }
}
