//! Style tokens for the single-screen UI.
//!
//! Dark-terminal palette: cyan for focus and highlights, green/red for
//! gains and losses, muted slate for secondary text. Chart series keep the
//! classic price-chart coloring (price blue, short MA red, long MA green,
//! returns purple, volatility orange).

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(139, 233, 253);
pub const POSITIVE: Color = Color::Rgb(80, 250, 123);
pub const NEGATIVE: Color = Color::Rgb(255, 85, 85);
pub const WARNING: Color = Color::Rgb(255, 184, 108);
pub const NEUTRAL: Color = Color::Rgb(189, 147, 249);
pub const MUTED: Color = Color::Rgb(98, 114, 164);

// Chart series
pub const PRICE: Color = Color::Rgb(97, 175, 239);
pub const SHORT_MA: Color = Color::Rgb(224, 108, 117);
pub const LONG_MA: Color = Color::Rgb(152, 195, 121);
pub const RETURNS: Color = Color::Rgb(198, 120, 221);
pub const VOLATILITY: Color = Color::Rgb(209, 154, 102);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Color for a signed value (returns, day-over-day changes).
pub fn signed(value: f64) -> Style {
    if value >= 0.0 {
        positive()
    } else {
        negative()
    }
}
