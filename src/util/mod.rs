//! Utility functions.
//!
//! This module provides colour mapping for the track series, layout
//! constants for the charts and the plain-text report.

mod colormaps;
mod layout_config;
mod report;

pub use layout_config::{HistogramLayoutConfig, LayoutConfig, PlotLayoutConfig};
pub use report::summary_text;
