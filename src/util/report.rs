//! Plain-text summary of a parsed track log.

use crate::data::TrackCollection;
use crate::stats::ElevationSummary;

/// Build the text printed by `--summary`.
pub fn summary_text(tracks: &TrackCollection) -> String {
    let mut text = format!("Tracks: {}\n", tracks.len());
    text.push_str(&format!("Points: {}\n", tracks.point_count()));

    match tracks.to_array() {
        Ok(matrix) if matrix.nrows() > 0 => {
            text.push_str(&format!("Fields per point: {}\n", matrix.ncols()));
        },
        Ok(_) => {},
        Err(e) => text.push_str(&format!("Fields per point: mixed ({})\n", e)),
    }

    for (i, track) in tracks.iter().enumerate() {
        text.push_str(&format!("  track {}: {} points\n", i + 1, track.len()));
    }

    match ElevationSummary::of(&tracks.elevations()) {
        Some(s) => text.push_str(&format!(
            "Elevation [m]: min {:.2} max {:.2} mean {:.2} std {:.2}\n",
            s.min, s.max, s.mean, s.std
        )),
        None => text.push_str("Elevation [m]: no data\n"),
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Point, Track};

    #[test]
    fn test_summary_text() {
        let tracks = TrackCollection::new(vec![
            Track::new(vec![
                Point::new(vec![0.0, 0.0, 10.0]),
                Point::new(vec![1.0, 1.0, 12.0]),
            ]),
            Track::new(vec![Point::new(vec![2.0, 2.0, 14.0])]),
        ]);
        let text = summary_text(&tracks);
        assert_eq!(
            text,
            "Tracks: 2\n\
             Points: 3\n\
             Fields per point: 3\n  \
             track 1: 2 points\n  \
             track 2: 1 points\n\
             Elevation [m]: min 10.00 max 14.00 mean 12.00 std 1.63\n"
        );
    }

    #[test]
    fn test_summary_text_mixed_arity() {
        let tracks = TrackCollection::new(vec![Track::new(vec![
            Point::new(vec![0.0, 0.0, 10.0]),
            Point::new(vec![1.0, 11.0]),
        ])]);
        let text = summary_text(&tracks);
        assert!(text.contains("Fields per point: mixed (Point 1 has 2 fields, expected 3)"));
    }

    #[test]
    fn test_summary_text_empty() {
        let text = summary_text(&TrackCollection::default());
        assert_eq!(text, "Tracks: 0\nPoints: 0\nElevation [m]: no data\n");
    }
}
