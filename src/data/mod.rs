//! Data reading and representation.
//!
//! This module handles reading track logs and representing them as an
//! ordered collection of tracks, each an ordered list of points.

mod point;
mod reader;
mod track;

pub use point::Point;
pub use reader::{classify_line, parse_row, LineKind, TrackReader, TERMINATOR};
pub use track::{Track, TrackCollection};
