//! Viewer feature - track map and elevation histogram.
//!
//! This module contains the viewer state: which view is shown, the palette
//! used for the track series, the highlighted track and the statistics the
//! views draw from. Rendering lives in [`ui`].

pub mod ui;

use crate::data::TrackCollection;
use crate::stats::{ElevationSummary, Extent, Histogram};
use crate::util::LayoutConfig;

/// View mode for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Easting/northing line plot of every track.
    #[default]
    Tracks,
    /// Elevation histogram over all points.
    Histogram,
}

impl ViewMode {
    /// Get the next view mode in cycle.
    pub fn next(self) -> Self {
        match self {
            ViewMode::Tracks => ViewMode::Histogram,
            ViewMode::Histogram => ViewMode::Tracks,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Tracks => "Tracks",
            ViewMode::Histogram => "Elevation histogram",
        }
    }
}

/// Color palette for the track series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    #[default]
    Viridis,
    /// Plasma colormap (perceptually uniform).
    Plasma,
    /// Rainbow colormap (high contrast between neighbouring tracks).
    Rainbow,
}

impl ColorPalette {
    /// Get the next palette in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Viridis => Self::Plasma,
            Self::Plasma => Self::Rainbow,
            Self::Rainbow => Self::Viridis,
        }
    }

    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Rainbow => "Rainbow",
        }
    }
}

/// State for the viewer.
#[derive(Debug, Clone)]
pub struct ViewerState {
    /// Current view mode.
    pub view_mode: ViewMode,
    /// Color palette for the track series.
    pub color_palette: ColorPalette,
    /// Highlighted track, if any.
    pub selected: Option<usize>,
    /// Number of tracks available for selection.
    pub track_count: usize,
    /// Elevation histogram, `None` without points.
    pub histogram: Option<Histogram>,
    /// Easting/northing bounding box, `None` without points.
    pub extent: Option<Extent>,
    /// Elevation statistics, `None` without points.
    pub summary: Option<ElevationSummary>,
    /// Chart layout constants.
    pub layout: LayoutConfig,
}

impl ViewerState {
    /// Build the viewer state for a parsed log.
    pub fn new(tracks: &TrackCollection) -> Self {
        Self::with_layout(tracks, LayoutConfig::default())
    }

    /// Build the viewer state with explicit layout constants.
    pub fn with_layout(tracks: &TrackCollection, layout: LayoutConfig) -> Self {
        let elevations = tracks.elevations();

        Self {
            view_mode: ViewMode::default(),
            color_palette: ColorPalette::default(),
            selected: None,
            track_count: tracks.len(),
            histogram: Histogram::new(&elevations, layout.histogram.bins),
            extent: Extent::of(tracks),
            summary: ElevationSummary::of(&elevations),
            layout,
        }
    }

    /// Cycle view mode.
    pub fn cycle_view_mode(&mut self) {
        self.view_mode = self.view_mode.next();
    }

    /// Cycle to next color palette.
    pub fn cycle_color_palette(&mut self) {
        self.color_palette = self.color_palette.next();
    }

    /// Highlight the next track, wrapping around.
    pub fn select_next(&mut self) {
        if self.track_count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1) % self.track_count,
        });
    }

    /// Highlight the previous track, wrapping around.
    pub fn select_prev(&mut self) {
        if self.track_count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None | Some(0) => self.track_count - 1,
            Some(i) => i - 1,
        });
    }

    /// Remove the highlight.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
