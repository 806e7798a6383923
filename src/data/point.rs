//! A single GPS fix.

/// One row of a track log: easting, northing, elevation and any further
/// fields the recorder wrote on the same line.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    fields: Vec<f64>,
}

impl Point {
    /// Create a point from its fields, in file order.
    pub fn new(fields: Vec<f64>) -> Self {
        Self { fields }
    }

    /// All fields of the point.
    pub fn fields(&self) -> &[f64] {
        &self.fields
    }

    /// Number of fields on the source line.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Planar x coordinate (first field).
    pub fn easting(&self) -> Option<f64> {
        self.fields.first().copied()
    }

    /// Planar y coordinate (second field).
    pub fn northing(&self) -> Option<f64> {
        self.fields.get(1).copied()
    }

    /// Elevation, taken from the last field.
    pub fn elevation(&self) -> Option<f64> {
        self.fields.last().copied()
    }

    /// Easting/northing pair, if the point has both.
    pub fn xy(&self) -> Option<(f64, f64)> {
        Some((self.easting()?, self.northing()?))
    }
}

impl From<Vec<f64>> for Point {
    fn from(fields: Vec<f64>) -> Self {
        Self::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let p = Point::new(vec![500_000.0, 4_100_000.0, 1234.5]);
        assert_eq!(p.arity(), 3);
        assert_eq!(p.easting(), Some(500_000.0));
        assert_eq!(p.northing(), Some(4_100_000.0));
        assert_eq!(p.elevation(), Some(1234.5));
        assert_eq!(p.xy(), Some((500_000.0, 4_100_000.0)));
    }

    #[test]
    fn test_elevation_is_last_field() {
        let p = Point::new(vec![1.0, 2.0, 3.0, 99.0]);
        assert_eq!(p.elevation(), Some(99.0));
    }

    #[test]
    fn test_short_point() {
        let p = Point::new(vec![7.0]);
        assert_eq!(p.northing(), None);
        assert_eq!(p.xy(), None);
        assert_eq!(p.elevation(), Some(7.0));
    }
}
