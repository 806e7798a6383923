//! Color mapping functions for track series.

use crate::viewer::ColorPalette;
use ratatui::style::Color;

impl ColorPalette {
    /// Map a normalized value (0.0 to 1.0) to an RGB color.
    pub fn color(self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Viridis => viridis_color(t),
            Self::Plasma => plasma_color(t),
            Self::Rainbow => rainbow_color(t),
        }
    }

    /// Color of series `index` out of `count`, spread evenly over the palette.
    pub fn series_color(self, index: usize, count: usize) -> Color {
        if count <= 1 {
            return self.color(0.5);
        }
        self.color(index as f64 / (count - 1) as f64)
    }
}

/// Two-segment linear interpolation between three RGB stops.
fn lerp3(t: f64, stops: [(f64, f64, f64); 3]) -> Color {
    let (a, b, local) = if t < 0.5 {
        (stops[0], stops[1], t * 2.0)
    } else {
        (stops[1], stops[2], (t - 0.5) * 2.0)
    };
    let mix = |x: f64, y: f64| (x + local * (y - x)) as u8;
    Color::Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Viridis colormap approximation.
fn viridis_color(t: f64) -> Color {
    lerp3(t, [(68.0, 1.0, 84.0), (33.0, 145.0, 140.0), (253.0, 231.0, 37.0)])
}

/// Plasma colormap approximation.
fn plasma_color(t: f64) -> Color {
    lerp3(t, [(13.0, 8.0, 135.0), (204.0, 71.0, 120.0), (240.0, 249.0, 33.0)])
}

/// Rainbow colormap, hue from 240° (blue) down to 0° (red).
fn rainbow_color(t: f64) -> Color {
    let h = (1.0 - t) * 240.0;
    let x = 1.0 - ((h / 60.0) % 2.0 - 1.0).abs();

    let (r, g, b) = if h < 60.0 {
        (1.0, x, 0.0)
    } else if h < 120.0 {
        (x, 1.0, 0.0)
    } else if h < 180.0 {
        (0.0, 1.0, x)
    } else {
        (0.0, x, 1.0)
    };

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ColorPalette::Viridis.color(0.0), Color::Rgb(68, 1, 84));
        assert_eq!(ColorPalette::Viridis.color(1.0), Color::Rgb(253, 231, 37));
        assert_eq!(ColorPalette::Rainbow.color(0.0), Color::Rgb(0, 0, 255));
        assert_eq!(ColorPalette::Rainbow.color(1.0), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(
            ColorPalette::Plasma.color(-3.0),
            ColorPalette::Plasma.color(0.0)
        );
        assert_eq!(
            ColorPalette::Plasma.color(7.0),
            ColorPalette::Plasma.color(1.0)
        );
    }

    #[test]
    fn test_series_color_spread() {
        let p = ColorPalette::Viridis;
        assert_eq!(p.series_color(0, 5), p.color(0.0));
        assert_eq!(p.series_color(4, 5), p.color(1.0));
        assert_eq!(p.series_color(0, 1), p.color(0.5));
    }
}
