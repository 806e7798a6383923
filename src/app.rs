//! Application state and logic.

use std::path::PathBuf;

use crate::data::TrackCollection;
use crate::shared::format_number;
use crate::viewer::ViewerState;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Path of the loaded track log.
    pub file_path: PathBuf,
    /// Parsed tracks.
    pub tracks: TrackCollection,
    /// Viewer state.
    pub viewer: ViewerState,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance for an already parsed log.
    pub fn new(file_path: PathBuf, tracks: TrackCollection) -> Self {
        let viewer = ViewerState::new(&tracks);
        let status = format!(
            "{} loaded: {} tracks, {} points",
            file_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "file".to_string()),
            format_number(tracks.len()),
            format_number(tracks.point_count())
        );

        Self {
            file_path,
            tracks,
            viewer,
            status,
            theme: Theme::GruvboxDark,
        }
    }

    /// Switch between the track map and the histogram.
    pub fn cycle_view_mode(&mut self) {
        self.viewer.cycle_view_mode();
        self.status = format!("View: {}", self.viewer.view_mode.name());
    }

    /// Cycle the track color palette.
    pub fn cycle_color_palette(&mut self) {
        self.viewer.cycle_color_palette();
        self.status = format!("Palette: {}", self.viewer.color_palette.name());
    }

    /// Highlight the next track.
    pub fn select_next_track(&mut self) {
        self.viewer.select_next();
        self.update_selection_status();
    }

    /// Highlight the previous track.
    pub fn select_prev_track(&mut self) {
        self.viewer.select_prev();
        self.update_selection_status();
    }

    /// Remove the track highlight.
    pub fn clear_selection(&mut self) {
        self.viewer.clear_selection();
        self.status = "All tracks".to_string();
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Show key help in the status line.
    pub fn show_help(&mut self) {
        self.status =
            "Help: q=quit, Tab=tracks/histogram, j/k=select track, Esc=clear, c=palette, T=theme"
                .to_string();
    }

    fn update_selection_status(&mut self) {
        self.status = match self.viewer.selected.and_then(|i| Some((i, self.tracks.get(i)?))) {
            Some((i, track)) => format!(
                "Track {}/{}: {} points",
                i + 1,
                self.tracks.len(),
                format_number(track.len())
            ),
            None => "No tracks".to_string(),
        };
    }
}
