//! Track log reader.
//!
//! The log is line oriented:
//!
//! ```text
//! 1
//! 512034.1 4102339.8 1021.4
//! 512036.0 4102341.2 1022.0
//! END
//! 2
//! ...
//! END
//! END
//! ```
//!
//! An integer line opens a track, `END` closes it, anything else is a row of
//! whitespace-separated floats. A blank line (or end of stream) stops the scan.

use super::{Point, Track, TrackCollection};
use crate::error::{Result, TrackError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Literal line that closes a track's data block.
pub const TERMINATOR: &str = "END";

/// What a single (trimmed) line of the log means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty line; ends the scan.
    Blank,
    /// Track number opening a new data block, as written.
    Marker(&'a str),
    /// `END`.
    Terminator,
    /// A row of numeric fields.
    DataRow(&'a str),
}

/// Classify one line of the log.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if line.is_empty() {
        LineKind::Blank
    } else if is_track_number(line) {
        LineKind::Marker(line)
    } else if line == TERMINATOR {
        LineKind::Terminator
    } else {
        LineKind::DataRow(line)
    }
}

/// Optional sign followed by ASCII digits. The value is never used, so there
/// is no width limit.
fn is_track_number(line: &str) -> bool {
    let digits = line.strip_prefix(['+', '-']).unwrap_or(line);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse the fields of a data row. `line_no` is 1-based and only used for errors.
pub fn parse_row(row: &str, line_no: usize) -> Result<Point> {
    row.split_whitespace()
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|e| TrackError::malformed_field(line_no, field, e))
        })
        .collect::<Result<Vec<f64>>>()
        .map(Point::new)
}

/// Track log reader.
#[derive(Debug)]
pub struct TrackReader;

impl TrackReader {
    /// Read and parse a track log file.
    pub fn read_file(path: &Path) -> Result<TrackCollection> {
        let file = File::open(path).map_err(|e| TrackError::file_open(path.to_path_buf(), e))?;
        let tracks = Self::parse(BufReader::new(file))?;

        tracing::info!(
            "Read {} tracks ({} points) from {}",
            tracks.len(),
            tracks.point_count(),
            path.display()
        );

        Ok(tracks)
    }

    /// Parse a track log from any buffered source.
    pub fn parse<R: BufRead>(reader: R) -> Result<TrackCollection> {
        let mut tracks = Vec::new();
        let mut current = Vec::new();
        let mut markers_seen = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            match classify_line(&line) {
                LineKind::Blank => {
                    tracing::debug!("Blank line {}, stopping", line_no);
                    break;
                },
                LineKind::Marker(number) => {
                    tracing::debug!("Track number {} at line {}", number, line_no);
                    markers_seen += 1;
                },
                LineKind::Terminator => {
                    let points = std::mem::take(&mut current);
                    if markers_seen > tracks.len() {
                        tracing::debug!(
                            "Track {} closed at line {} with {} points",
                            tracks.len() + 1,
                            line_no,
                            points.len()
                        );
                        tracks.push(Track::new(points));
                    } else {
                        tracing::debug!("Ignoring surplus terminator at line {}", line_no);
                    }
                },
                LineKind::DataRow(row) => {
                    current.push(parse_row(row, line_no)?);
                },
            }
        }

        if !current.is_empty() {
            tracing::debug!("Discarding {} unterminated points", current.len());
        }

        Ok(TrackCollection::new(tracks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(input: &str) -> Result<TrackCollection> {
        TrackReader::parse(input.as_bytes())
    }

    fn fields(c: &TrackCollection) -> Vec<Vec<Vec<f64>>> {
        c.iter()
            .map(|t| t.points.iter().map(|p| p.fields().to_vec()).collect())
            .collect()
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   \r"), LineKind::Blank);
        assert_eq!(classify_line("42"), LineKind::Marker("42"));
        assert_eq!(classify_line(" -3 \n"), LineKind::Marker("-3"));
        assert_eq!(classify_line("+7"), LineKind::Marker("+7"));
        assert_eq!(
            classify_line("99999999999999999999"),
            LineKind::Marker("99999999999999999999")
        );
        assert_eq!(classify_line("-"), LineKind::DataRow("-"));
        assert_eq!(classify_line("1e3"), LineKind::DataRow("1e3"));
        assert_eq!(classify_line("END"), LineKind::Terminator);
        assert_eq!(classify_line("END\r"), LineKind::Terminator);
        assert_eq!(classify_line("1.0 2.0 3.0"), LineKind::DataRow("1.0 2.0 3.0"));
        assert_eq!(classify_line("end"), LineKind::DataRow("end"));
    }

    #[test]
    fn test_literal_example() {
        let c = parse_str("1\n0.0 0.0 10.0\n1.0 1.0 12.0\nEND\nEND\n\n").unwrap();
        assert_eq!(
            fields(&c),
            vec![vec![vec![0.0, 0.0, 10.0], vec![1.0, 1.0, 12.0]]]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_str("").unwrap().is_empty());
        assert!(parse_str("\n1\n1.0 2.0 3.0\nEND\n").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_terminator_suppressed() {
        let c = parse_str("7\n1 2 3.5\nEND\nEND\nEND\n").unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.point_count(), 1);
    }

    #[test]
    fn test_multiple_tracks_in_order() {
        let input = "1\n0 0 1\n0 1 2\nEND\n2\n5 5 3\nEND\n3\n9 9 4\n9 8 5\n9 7 6\nEND\nEND\n";
        let c = parse_str(input).unwrap();
        assert_eq!(c.len(), 3);
        let lens: Vec<usize> = c.iter().map(Track::len).collect();
        assert_eq!(lens, vec![2, 1, 3]);
        assert_eq!(c.elevations(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_concatenation_reproduces_data_lines() {
        let rows = ["10.5 20.25 300", "11 21 301.5", "-4e2 7 8", "1.5 2.5 3.5"];
        let input = format!(
            "1\n{}\n{}\nEND\n2\n{}\n{}\nEND\nEND\n",
            rows[0], rows[1], rows[2], rows[3]
        );
        let c = parse_str(&input).unwrap();
        let flat: Vec<Vec<f64>> = c.all_points().map(|p| p.fields().to_vec()).collect();
        let expected: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| r.split(' ').map(|f| f.parse().unwrap()).collect())
            .collect();
        assert_eq!(flat, expected);
    }

    #[test]
    fn test_marker_value_ignored() {
        let c = parse_str("100\n1 1 1\nEND\n5\n2 2 2\nEND\n").unwrap();
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_oversized_track_number() {
        let c = parse_str("1\n0 0 1\nEND\n99999999999999999999\n5 5 5\nEND\nEND\n").unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(fields(&c)[1], vec![vec![5.0, 5.0, 5.0]]);
    }

    #[test]
    fn test_marker_without_points_yields_empty_track() {
        let c = parse_str("1\nEND\n2\n1 1 1\nEND\n").unwrap();
        assert_eq!(c.len(), 2);
        assert!(c.tracks()[0].is_empty());
        assert_eq!(c.tracks()[1].len(), 1);
    }

    #[test]
    fn test_unterminated_track_discarded() {
        let c = parse_str("1\n1 1 1\nEND\n2\n2 2 2\n3 3 3\n").unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.point_count(), 1);
    }

    #[test]
    fn test_blank_line_stops_scan() {
        let c = parse_str("1\n1 1 1\nEND\n\n2\n2 2 2\nEND\n").unwrap();
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_points_before_first_marker_are_dropped_by_terminator() {
        let c = parse_str("1 1 1\nEND\n1\n2 2 2\nEND\n").unwrap();
        assert_eq!(fields(&c), vec![vec![vec![2.0, 2.0, 2.0]]]);
    }

    #[test]
    fn test_variable_arity() {
        let c = parse_str("1\n1 2\n1 2 3 4\nEND\n").unwrap();
        let arities: Vec<usize> = c.all_points().map(Point::arity).collect();
        assert_eq!(arities, vec![2, 4]);
    }

    #[test]
    fn test_extra_whitespace_between_fields() {
        let c = parse_str("1\n1.0   2.0\t3.0\nEND\n").unwrap();
        assert_eq!(fields(&c), vec![vec![vec![1.0, 2.0, 3.0]]]);
    }

    #[test]
    fn test_malformed_field_is_fatal() {
        let err = parse_str("1\n0 0 1\nabc 1.0 2.0\nEND\n").unwrap_err();
        match err {
            TrackError::MalformedField { line, field, .. } => {
                assert_eq!(line, 3);
                assert_eq!(field, "abc");
            },
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let err = TrackReader::parse(&b"1\n\xff\xfe\nEND\n"[..]).unwrap_err();
        assert!(matches!(err, TrackError::Io(_)));
    }

    #[test]
    fn test_read_file_missing() {
        let err = TrackReader::read_file(Path::new("/nonexistent/tracks.txt")).unwrap_err();
        assert!(matches!(err, TrackError::FileOpen { .. }));
    }
}
