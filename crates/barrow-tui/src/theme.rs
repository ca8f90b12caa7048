//! Terminal color theme.
//!
//! The core crate speaks in 16-color palette indices; the theme decides
//! how each index and each piece of chrome is actually displayed.

use ratatui::style::Color;

/// Color theme for the terminal UI.
/// UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,

    /// Default border color
    pub border: Color,
    /// Action border (item menus, targeting)
    pub border_action: Color,
    /// Danger border (death banner)
    pub border_danger: Color,

    /// Filled part of the HP bar
    pub bar_fill: Color,
    /// Empty part of the HP bar
    pub bar_empty: Color,

    // Map terrain
    pub wall_lit: Color,
    pub wall_dark: Color,
    pub floor_lit: Color,
    pub floor_dark: Color,
}

impl Theme {
    /// Dark terminal background theme (default).
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            border_action: Color::Yellow,
            border_danger: Color::Red,
            bar_fill: Color::Red,
            bar_empty: Color::DarkGray,
            wall_lit: Color::Gray,
            wall_dark: Color::DarkGray,
            floor_lit: Color::White,
            floor_dark: Color::DarkGray,
        }
    }

    /// Map a core palette index to a terminal color.
    pub fn palette(&self, index: u8) -> Color {
        match index {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            7 => Color::Gray,
            8 => Color::DarkGray,
            9 => Color::LightRed,
            10 => Color::LightGreen,
            11 => Color::LightYellow,
            12 => Color::LightBlue,
            13 => Color::LightMagenta,
            14 => Color::LightCyan,
            _ => Color::White,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
