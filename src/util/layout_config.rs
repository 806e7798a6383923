//! Layout configuration constants for the viewer charts.

use crate::stats::HISTOGRAM_BINS;

/// Configuration for the track map.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor applied to each side of the track extent (0.05 = 5%).
    pub axis_padding_factor: f64,
    /// Number of labels along each axis.
    pub axis_label_count: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            axis_padding_factor: 0.05,
            axis_label_count: 3,
        }
    }
}

/// Configuration for the elevation histogram.
#[derive(Debug, Clone)]
pub struct HistogramLayoutConfig {
    /// Number of bins.
    pub bins: usize,
    /// Headroom above the tallest bar, as a fraction of its height.
    pub headroom_factor: f64,
}

impl Default for HistogramLayoutConfig {
    fn default() -> Self {
        Self {
            bins: HISTOGRAM_BINS,
            headroom_factor: 0.1,
        }
    }
}

/// Combined layout configuration for both views.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for the track map.
    pub plot: PlotLayoutConfig,
    /// Configuration for the histogram.
    pub histogram: HistogramLayoutConfig,
}
