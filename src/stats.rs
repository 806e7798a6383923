//! Summary statistics over parsed tracks.
//!
//! Everything here is computed once after loading and handed to the views.

use crate::data::{Point, TrackCollection};

/// Number of bins in the elevation histogram.
pub const HISTOGRAM_BINS: usize = 100;

/// Equal-width histogram over the finite values of a sample.
///
/// Bins are half-open `[lo, hi)` except the last, which also includes the
/// maximum. A sample with a single distinct value is spread over
/// `[v - 0.5, v + 0.5]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: Vec<usize>,
    edges: Vec<f64>,
}

impl Histogram {
    /// Bin `values` into `bins` bins. Returns `None` when there is nothing to bin.
    pub fn new(values: &[f64], bins: usize) -> Option<Self> {
        if bins == 0 {
            return None;
        }

        let (min, max) = finite_range(values)?;
        let (lo, hi) = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0usize; bins];
        for &v in values.iter().filter(|v| v.is_finite()) {
            let idx = if v >= hi {
                bins - 1
            } else {
                (((v - lo) / (hi - lo)) * bins as f64).floor() as usize
            };
            counts[idx.min(bins - 1)] += 1;
        }

        Some(Self { counts, edges })
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Count per bin.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Bin edges, one more than the number of bins.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Midpoint of every bin.
    pub fn bin_centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Lower and upper edge of the whole histogram.
    pub fn range(&self) -> (f64, f64) {
        let lo = self.edges.first().copied().unwrap_or(0.0);
        let hi = self.edges.last().copied().unwrap_or(0.0);
        (lo, hi)
    }
}

/// Bounding box of all easting/northing pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Smallest easting.
    pub min_x: f64,
    /// Largest easting.
    pub max_x: f64,
    /// Smallest northing.
    pub min_y: f64,
    /// Largest northing.
    pub max_y: f64,
}

impl Extent {
    /// Extent of every point with at least two finite coordinates.
    pub fn of(tracks: &TrackCollection) -> Option<Self> {
        tracks
            .all_points()
            .filter_map(Point::xy)
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc: Option<Self>, (x, y)| {
                Some(match acc {
                    None => Self {
                        min_x: x,
                        max_x: x,
                        min_y: y,
                        max_y: y,
                    },
                    Some(e) => Self {
                        min_x: e.min_x.min(x),
                        max_x: e.max_x.max(x),
                        min_y: e.min_y.min(y),
                        max_y: e.max_y.max(y),
                    },
                })
            })
    }

    /// Grow each side by `factor` of the span. A zero span grows by 1 unit.
    pub fn padded(&self, factor: f64) -> Self {
        let pad = |lo: f64, hi: f64| {
            let span = hi - lo;
            if span.abs() < 1e-10 {
                1.0
            } else {
                span * factor
            }
        };
        let px = pad(self.min_x, self.max_x);
        let py = pad(self.min_y, self.max_y);
        Self {
            min_x: self.min_x - px,
            max_x: self.max_x + px,
            min_y: self.min_y - py,
            max_y: self.max_y + py,
        }
    }
}

/// Descriptive statistics of the elevation column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationSummary {
    /// Number of finite values.
    pub count: usize,
    /// Minimum.
    pub min: f64,
    /// Maximum.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
}

impl ElevationSummary {
    /// Summarise the finite values of `values`.
    pub fn of(values: &[f64]) -> Option<Self> {
        let (min, max) = finite_range(values)?;
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;
        let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        Some(Self {
            count,
            min,
            max,
            mean,
            std: variance.sqrt(),
        })
    }
}

fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Track;

    #[test]
    fn test_histogram_basic() {
        let h = Histogram::new(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(h.bins(), 4);
        assert_eq!(h.edges(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        // last bin is closed
        assert_eq!(h.counts(), &[1, 1, 1, 2]);
        assert_eq!(h.total(), 5);
        assert_eq!(h.max_count(), 2);
    }

    #[test]
    fn test_histogram_single_value() {
        let h = Histogram::new(&[10.0, 10.0, 10.0], 10).unwrap();
        assert_eq!(h.range(), (9.5, 10.5));
        assert_eq!(h.total(), 3);
        assert_eq!(h.counts()[5], 3);
    }

    #[test]
    fn test_histogram_ignores_non_finite() {
        let h = Histogram::new(&[1.0, f64::NAN, 2.0, f64::INFINITY], 2).unwrap();
        assert_eq!(h.total(), 2);
        assert_eq!(h.counts(), &[1, 1]);
    }

    #[test]
    fn test_histogram_empty() {
        assert!(Histogram::new(&[], HISTOGRAM_BINS).is_none());
        assert!(Histogram::new(&[f64::NAN], HISTOGRAM_BINS).is_none());
        assert!(Histogram::new(&[1.0], 0).is_none());
    }

    #[test]
    fn test_histogram_hundred_bins() {
        let values: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        let h = Histogram::new(&values, HISTOGRAM_BINS).unwrap();
        assert_eq!(h.bins(), 100);
        assert_eq!(h.edges().len(), 101);
        assert_eq!(h.total(), 1000);
        assert!(h.counts().iter().all(|&c| c == 10 || c == 9 || c == 11));
        let centers = h.bin_centers();
        assert_eq!(centers.len(), 100);
        assert!((centers[0] - 4.995).abs() < 1e-9);
    }

    #[test]
    fn test_extent() {
        let tracks = TrackCollection::new(vec![
            Track::new(vec![
                Point::new(vec![1.0, 5.0, 0.0]),
                Point::new(vec![3.0, -2.0, 0.0]),
            ]),
            Track::new(vec![Point::new(vec![-1.0, 4.0, 0.0])]),
        ]);
        let e = Extent::of(&tracks).unwrap();
        assert_eq!((e.min_x, e.max_x, e.min_y, e.max_y), (-1.0, 3.0, -2.0, 5.0));

        let p = e.padded(0.5);
        assert_eq!((p.min_x, p.max_x), (-3.0, 5.0));
    }

    #[test]
    fn test_extent_empty_and_degenerate() {
        assert!(Extent::of(&TrackCollection::default()).is_none());

        let tracks = TrackCollection::new(vec![Track::new(vec![Point::new(vec![2.0, 2.0, 1.0])])]);
        let p = Extent::of(&tracks).unwrap().padded(0.1);
        assert_eq!((p.min_x, p.max_x, p.min_y, p.max_y), (1.0, 3.0, 1.0, 3.0));
    }

    #[test]
    fn test_elevation_summary() {
        let s = ElevationSummary::of(&[10.0, 12.0, 14.0, f64::NAN]).unwrap();
        assert_eq!(s.count, 3);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 14.0);
        assert_eq!(s.mean, 12.0);
        assert!((s.std - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!(ElevationSummary::of(&[]).is_none());
    }
}
