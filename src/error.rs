//! Error types for Trackview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Trackview operations.
pub type Result<T> = std::result::Result<T, TrackError>;

/// Errors that can occur in Trackview.
#[derive(Debug, Error)]
pub enum TrackError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A data line contained a field that is not a floating-point number.
    #[error("Malformed field '{field}' on line {line}")]
    MalformedField {
        /// 1-based line number in the source.
        line: usize,
        /// The offending token.
        field: String,
        /// Underlying parse error.
        #[source]
        source: ParseFloatError,
    },

    /// Points of differing arity cannot be stacked into one matrix.
    #[error("Point {index} has {found} fields, expected {expected}")]
    InconsistentArity {
        /// Arity of the first point.
        expected: usize,
        /// Arity of the offending point.
        found: usize,
        /// Index of the offending point in the flattened sequence.
        index: usize,
    },

    /// Matrix construction failed.
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl TrackError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a MalformedField error.
    pub fn malformed_field(line: usize, field: impl Into<String>, source: ParseFloatError) -> Self {
        Self::MalformedField {
            line,
            field: field.into(),
            source,
        }
    }
}
