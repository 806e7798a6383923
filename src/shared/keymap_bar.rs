//! Keymap help bar UI component.

use crate::shared::ThemeColors;
use crate::viewer::ViewMode;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, view_mode: ViewMode, colors: &ThemeColors) {
    let keymap_text = match view_mode {
        ViewMode::Tracks => {
            "q:quit | Tab:view | jk/↑↓:select track | Esc:clear | c:palette | T:theme | ?:help"
        },
        ViewMode::Histogram => "q:quit | Tab:view | T:theme | ?:help",
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.fg0).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
