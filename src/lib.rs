//! Trackview - a terminal viewer for GPS track logs.
//!
//! Trackview reads a plain-text track log, splits it into tracks and shows
//! them in the terminal: an easting/northing map of every track and a
//! histogram of the elevations of all recorded points.
//!
//! # Log format
//!
//! An integer line opens a track, `END` closes it, every other line is a
//! point given as whitespace-separated floats (easting, northing, elevation).
//! A blank line ends the log.
//!
//! # Example
//!
//! ```
//! use trackview::data::TrackReader;
//!
//! let log = "1\n0.0 0.0 10.0\n1.0 1.0 12.0\nEND\nEND\n";
//! let tracks = TrackReader::parse(log.as_bytes())?;
//!
//! assert_eq!(tracks.len(), 1);
//! assert_eq!(tracks.elevations(), vec![10.0, 12.0]);
//! # Ok::<(), trackview::TrackError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod shared;
pub mod stats;
pub mod ui;
pub mod util;
pub mod viewer;

pub use error::{Result, TrackError};
