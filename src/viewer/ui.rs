//! Viewer - pure rendering layer.

use super::{ViewMode, ViewerState};
use crate::data::TrackCollection;
use crate::shared::{format_axis_label, format_number, format_stat_value, ThemeColors};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Title shared by both charts.
pub const CHART_TITLE: &str = " GPS tracks ";

/// Draw the active view into `area`.
pub fn draw_viewer(
    f: &mut Frame<'_>,
    area: Rect,
    state: &ViewerState,
    tracks: &TrackCollection,
    colors: &ThemeColors,
) {
    if tracks.point_count() == 0 {
        draw_empty(f, area, colors);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(area);

    draw_header(f, chunks[0], state, tracks, colors);

    match state.view_mode {
        ViewMode::Tracks => draw_tracks_view(f, chunks[1], state, tracks, colors),
        ViewMode::Histogram => draw_histogram_view(f, chunks[1], state, colors),
    }
}

fn draw_header(
    f: &mut Frame<'_>,
    area: Rect,
    state: &ViewerState,
    tracks: &TrackCollection,
    colors: &ThemeColors,
) {
    let mut spans = vec![
        Span::styled(
            state.view_mode.name(),
            Style::default()
                .fg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} tracks, {} points",
                format_number(tracks.len()),
                format_number(tracks.point_count())
            ),
            Style::default().fg(colors.green),
        ),
    ];

    match state.view_mode {
        ViewMode::Tracks => {
            spans.push(Span::styled(
                format!("  [{}]", state.color_palette.name()),
                Style::default().fg(colors.aqua),
            ));
        },
        ViewMode::Histogram => {
            if let Some(s) = state.summary {
                spans.push(Span::styled(
                    format!(
                        "  min {}  max {}  mean {}  std {}",
                        format_stat_value(s.min),
                        format_stat_value(s.max),
                        format_stat_value(s.mean),
                        format_stat_value(s.std)
                    ),
                    Style::default().fg(colors.aqua),
                ));
            }
        },
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors.bg2)),
        );

    f.render_widget(paragraph, area);
}

fn draw_tracks_view(
    f: &mut Frame<'_>,
    area: Rect,
    state: &ViewerState,
    tracks: &TrackCollection,
    colors: &ThemeColors,
) {
    let Some(extent) = state.extent else {
        draw_empty(f, area, colors);
        return;
    };
    let bounds = extent.padded(state.layout.plot.axis_padding_factor);

    let series: Vec<Vec<(f64, f64)>> = tracks.iter().map(|t| t.xy_series()).collect();

    // Selected track is pushed last so it is drawn on top.
    let mut order: Vec<usize> = (0..series.len())
        .filter(|&i| Some(i) != state.selected)
        .collect();
    order.extend(state.selected.filter(|&i| i < series.len()));

    let datasets: Vec<Dataset<'_>> = order
        .into_iter()
        .map(|i| {
            let color = match state.selected {
                Some(sel) if sel != i => colors.gray,
                _ => state.color_palette.series_color(i, series.len()),
            };
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(&series[i])
        })
        .collect();

    let label_count = state.layout.plot.axis_label_count;
    let x_axis = Axis::default()
        .title("Easting")
        .style(Style::default().fg(colors.fg0))
        .bounds([bounds.min_x, bounds.max_x])
        .labels(axis_labels(bounds.min_x, bounds.max_x, label_count));
    let y_axis = Axis::default()
        .title("Northing")
        .style(Style::default().fg(colors.fg0))
        .bounds([bounds.min_y, bounds.max_y])
        .labels(axis_labels(bounds.min_y, bounds.max_y, label_count));

    let chart = Chart::new(datasets)
        .block(chart_block(colors))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn draw_histogram_view(f: &mut Frame<'_>, area: Rect, state: &ViewerState, colors: &ThemeColors) {
    let Some(ref histogram) = state.histogram else {
        draw_empty(f, area, colors);
        return;
    };

    let bars: Vec<(f64, f64)> = histogram
        .bin_centers()
        .into_iter()
        .zip(histogram.counts().iter().map(|&c| c as f64))
        .collect();

    let (lo, hi) = histogram.range();
    let max_count = histogram.max_count() as f64;
    let y_max = (max_count * (1.0 + state.layout.histogram.headroom_factor)).max(1.0);

    let dataset = Dataset::default()
        .marker(Marker::HalfBlock)
        .graph_type(GraphType::Bar)
        .style(Style::default().fg(colors.aqua))
        .data(&bars);

    let x_axis = Axis::default()
        .title("Elevation [m]")
        .style(Style::default().fg(colors.fg0))
        .bounds([lo, hi])
        .labels(axis_labels(lo, hi, state.layout.plot.axis_label_count));
    let y_axis = Axis::default()
        .title("Number of measurements")
        .style(Style::default().fg(colors.fg0))
        .bounds([0.0, y_max])
        .labels(vec![
            "0".to_string(),
            format_number(histogram.max_count()),
        ]);

    let chart = Chart::new(vec![dataset])
        .block(chart_block(colors))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn chart_block(colors: &ThemeColors) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .title(CHART_TITLE)
        .title_style(
            Style::default()
                .fg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        )
}

/// Evenly spaced labels from `min` to `max`.
fn axis_labels(min: f64, max: f64, count: usize) -> Vec<String> {
    let count = count.max(2);
    (0..count)
        .map(|i| min + (max - min) * i as f64 / (count - 1) as f64)
        .map(format_axis_label)
        .collect()
}

fn draw_empty(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new("No tracks to display")
        .style(Style::default().fg(colors.fg0))
        .alignment(Alignment::Center)
        .block(chart_block(colors));
    f.render_widget(paragraph, area);
}
