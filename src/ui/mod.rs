//! User interface rendering.

use crate::app::App;
use crate::shared::{draw_keymap, draw_status, ThemeColors};
use crate::viewer::ui::draw_viewer;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(Block::default().style(Style::default().bg(colors.bg0)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_viewer(f, chunks[0], &app.viewer, &app.tracks, &colors);
    draw_status(f, chunks[1], &app.status, &colors);
    draw_keymap(f, chunks[2], app.viewer.view_mode, &colors);
}
