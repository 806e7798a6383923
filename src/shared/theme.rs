//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette (Gruvbox names).
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Main background.
    pub bg0: Color,
    /// Raised background (status bar).
    pub bg1: Color,
    /// Borders.
    pub bg2: Color,
    /// Primary text.
    pub fg0: Color,
    /// Highlights and titles.
    pub yellow: Color,
    /// Labels.
    pub green: Color,
    /// Values.
    pub aqua: Color,
    /// Dimmed content.
    pub gray: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg0: Color::Rgb(40, 40, 40),
                bg1: Color::Rgb(60, 56, 54),
                bg2: Color::Rgb(102, 92, 84),
                fg0: Color::Rgb(235, 219, 178),
                yellow: Color::Rgb(250, 189, 47),
                green: Color::Rgb(184, 187, 38),
                aqua: Color::Rgb(142, 192, 124),
                gray: Color::Rgb(146, 131, 116),
            },
            Theme::GruvboxLight => Self {
                bg0: Color::Rgb(251, 241, 199),
                bg1: Color::Rgb(235, 219, 178),
                bg2: Color::Rgb(213, 196, 161),
                fg0: Color::Rgb(60, 56, 54),
                yellow: Color::Rgb(181, 118, 20),
                green: Color::Rgb(121, 116, 14),
                aqua: Color::Rgb(66, 123, 88),
                gray: Color::Rgb(146, 131, 116),
            },
        }
    }
}
