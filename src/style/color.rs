//! Color types and ramps used by the style resolvers.

use std::fmt;

use serde::{Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Linear interpolation between two colors, `t` clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b) }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A fill or stroke paint: a solid color or nothing at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Solid(Rgb),
    Transparent,
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Solid(rgb) => rgb.fmt(f),
            Paint::Transparent => f.write_str("transparent"),
        }
    }
}

impl Serialize for Paint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Neutral fill for regions without data (CSS "gainsboro").
pub const GAINSBORO: Rgb = Rgb::new(220, 220, 220);

/// Reversed ColorBrewer RdYlGn (7 classes): green (favorable) to red (unfavorable).
const RD_YL_GN_R: [Rgb; 7] = [
    Rgb::new(0x1a, 0x98, 0x50),
    Rgb::new(0x91, 0xcf, 0x60),
    Rgb::new(0xd9, 0xef, 0x8b),
    Rgb::new(0xff, 0xff, 0xbf),
    Rgb::new(0xfe, 0xe0, 0x8b),
    Rgb::new(0xfc, 0x8d, 0x59),
    Rgb::new(0xd7, 0x30, 0x27),
];

/// Continuous diverging ramp for `t` in [0, 1]; 0 is favorable, 1 unfavorable.
/// Non-finite input falls back to the midpoint.
pub fn diverging_color(t: f64) -> Rgb {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
    let last = RD_YL_GN_R.len() - 1;
    let pos = t * last as f64;
    let lo = (pos.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    RD_YL_GN_R[lo].lerp(RD_YL_GN_R[hi], pos - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_display() {
        assert_eq!(Rgb::new(0x73, 0, 0).to_string(), "#730000");
        assert_eq!(Paint::Solid(Rgb::new(255, 170, 0)).to_string(), "#ffaa00");
        assert_eq!(Paint::Transparent.to_string(), "transparent");
    }

    #[test]
    fn paint_serializes_as_css_string() {
        assert_eq!(serde_json::to_string(&Paint::Solid(GAINSBORO)).unwrap(), "\"#dcdcdc\"");
        assert_eq!(serde_json::to_string(&Paint::Transparent).unwrap(), "\"transparent\"");
    }

    #[test]
    fn ramp_endpoints_and_midpoint() {
        assert_eq!(diverging_color(0.0), Rgb::new(0x1a, 0x98, 0x50));
        assert_eq!(diverging_color(1.0), Rgb::new(0xd7, 0x30, 0x27));
        assert_eq!(diverging_color(0.5), Rgb::new(0xff, 0xff, 0xbf));
    }

    #[test]
    fn ramp_clamps_and_handles_nan() {
        assert_eq!(diverging_color(-3.0), diverging_color(0.0));
        assert_eq!(diverging_color(7.0), diverging_color(1.0));
        assert_eq!(diverging_color(f64::NAN), diverging_color(0.5));
    }

    #[test]
    fn lerp_halfway() {
        assert_eq!(BLACK.lerp(Rgb::new(200, 100, 50), 0.5), Rgb::new(100, 50, 25));
    }
}
