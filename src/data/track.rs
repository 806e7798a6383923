//! Tracks and the collection the parser produces.

use super::Point;
use crate::error::{Result, TrackError};
use ndarray::Array2;

/// One contiguous recording session, points in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    /// Points of the track.
    pub points: Vec<Point>,
}

impl Track {
    /// Create a track from its points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the track has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Easting/northing pairs, skipping points with fewer than two fields.
    pub fn xy_series(&self) -> Vec<(f64, f64)> {
        self.points.iter().filter_map(Point::xy).collect()
    }
}

/// All tracks of a log, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackCollection {
    tracks: Vec<Track>,
}

impl TrackCollection {
    /// Create a collection from tracks.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether there are no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate over tracks.
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Get a track by index.
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Tracks as a slice.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Total number of points over all tracks.
    pub fn point_count(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }

    /// All points of all tracks, track-then-point order.
    pub fn all_points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.tracks.iter().flat_map(|t| t.points.iter())
    }

    /// Last field of every point, in the same order as [`Self::all_points`].
    pub fn elevations(&self) -> Vec<f64> {
        self.all_points().filter_map(Point::elevation).collect()
    }

    /// Stack every point into a matrix, one row per point.
    ///
    /// All points must have the same arity.
    pub fn to_array(&self) -> Result<Array2<f64>> {
        let ncols = match self.all_points().next() {
            Some(first) => first.arity(),
            None => return Ok(Array2::zeros((0, 0))),
        };

        let mut flat = Vec::with_capacity(self.point_count() * ncols);
        for (index, point) in self.all_points().enumerate() {
            if point.arity() != ncols {
                return Err(TrackError::InconsistentArity {
                    expected: ncols,
                    found: point.arity(),
                    index,
                });
            }
            flat.extend_from_slice(point.fields());
        }

        let nrows = flat.len() / ncols.max(1);
        Ok(Array2::from_shape_vec((nrows, ncols), flat)?)
    }
}

impl<'a> IntoIterator for &'a TrackCollection {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
