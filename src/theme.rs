//! Display themes for the terminal user interface.
//!
//! Two-valued light/dark mode with a color palette per mode. Every widget
//! draws through the active palette, so a toggle restyles the whole frame on
//! the next draw. The mode is session-scoped and starts light.

use ratatui::style::Color;

/// The two display modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors the widgets draw with for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub completed: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(245, 245, 240),
    text: Color::Rgb(30, 30, 30),
    dim: Color::Rgb(130, 130, 125),
    accent: Color::Rgb(0, 95, 135),
    border: Color::Rgb(170, 170, 160),
    highlight_bg: Color::Rgb(0, 95, 135),
    highlight_fg: Color::Rgb(245, 245, 240),
    completed: Color::Rgb(0, 110, 0),
};

const DARK: Palette = Palette {
    background: Color::Rgb(24, 24, 28),
    text: Color::Rgb(220, 220, 215),
    dim: Color::Rgb(120, 120, 125),
    accent: Color::Rgb(95, 175, 215),
    border: Color::Rgb(80, 80, 90),
    highlight_bg: Color::Rgb(95, 175, 215),
    highlight_fg: Color::Rgb(24, 24, 28),
    completed: Color::Rgb(80, 200, 120),
};

impl Theme {
    /// Flip light to dark and back. Unconditional; toggling twice returns to
    /// the original mode.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Display name for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// The color palette for this mode.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}
