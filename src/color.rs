//! Color types and color-space conversion.
//!
//! This module provides the RGB and HSL value types shared across the
//! library, the conversions between them, and hex string parsing used
//! when a caller enters a color by hand.

use std::fmt;

use thiserror::Error;

/// An 8-bit-per-channel RGB color.
///
/// Equality is exact channel equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string.
    ///
    /// Accepts exactly six hex digits, with or without a leading `#`.
    /// Anything else is rejected; the caller decides how to present the
    /// error.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::InvalidLength {
                len: hex.chars().count(),
            });
        }

        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;

        Ok(Self { r, g, b })
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Errors from parsing a hex color string.
#[derive(Debug, Error)]
pub enum ColorParseError {
    /// The string does not contain exactly six hex digits
    #[error("expected 6 hex digits, got {len}")]
    InvalidLength {
        /// Number of digits found after stripping `#`
        len: usize,
    },

    /// A channel pair is not valid hexadecimal
    #[error("invalid hex digit: {0}")]
    InvalidDigit(#[from] std::num::ParseIntError),
}

/// A color in HSL space.
///
/// All three components are normalized to [0, 1). Hue is circular: 0 and
/// 1 name the same angle. Hue is undefined for achromatic colors
/// (r == g == b) and defaults to 0 there, so the round-trip through
/// [`Hsl::from_rgb`] and [`Hsl::to_rgb`] is not bit-exact for grays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue (0-1, circular)
    pub h: f32,
    /// Saturation (0-1)
    pub s: f32,
    /// Lightness (0-1)
    pub l: f32,
}

impl Hsl {
    /// Create an HSL color from raw components.
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert an RGB color to HSL.
    pub fn from_rgb(color: Rgb) -> Self {
        let r = color.r as f32 / 255.0;
        let g = color.g as f32 / 255.0;
        let b = color.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let h = if max == min {
            0.0
        } else if max == r {
            let h = ((g - b) / (max - min)) / 6.0;
            if h < 0.0 { h + 1.0 } else { h }
        } else if max == g {
            (2.0 + (b - r) / (max - min)) / 6.0
        } else {
            (4.0 + (r - g) / (max - min)) / 6.0
        };

        let l = (max + min) / 2.0;

        let s = if max == min {
            0.0
        } else if l <= 0.5 {
            (max - min) / (2.0 * l)
        } else {
            (max - min) / (2.0 - 2.0 * l)
        };

        Self { h, s, l }
    }

    /// Convert back to RGB.
    ///
    /// Channels are scaled to 8 bits by truncation, not rounding. Output
    /// files produced from these values depend on that, so keep it.
    pub fn to_rgb(&self) -> Rgb {
        let (r, g, b) = if self.s == 0.0 {
            (self.l, self.l, self.l)
        } else {
            let q = if self.l < 0.5 {
                self.l * (1.0 + self.s)
            } else {
                self.l + self.s - self.l * self.s
            };
            let p = 2.0 * self.l - q;

            (
                hue_to_channel(p, q, self.h + 1.0 / 3.0),
                hue_to_channel(p, q, self.h),
                hue_to_channel(p, q, self.h - 1.0 / 3.0),
            )
        };

        Rgb {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        }
    }
}

impl From<Rgb> for Hsl {
    fn from(color: Rgb) -> Self {
        Self::from_rgb(color)
    }
}

impl From<Hsl> for Rgb {
    fn from(color: Hsl) -> Self {
        color.to_rgb()
    }
}

/// Evaluate the piecewise hue-to-channel function at hue offset `t`.
///
/// `t` may be one step outside [0, 1] (the offsets are H ± 1/3); a single
/// wrap brings it back into range.
fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_red() {
        let hsl = Hsl::from_rgb(Rgb::new(255, 0, 0));
        assert!(hsl.h.abs() < 0.001);
        assert!((hsl.s - 1.0).abs() < 0.001);
        assert!((hsl.l - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_pure_green() {
        let hsl = Hsl::from_rgb(Rgb::new(0, 255, 0));
        assert!((hsl.h - 1.0 / 3.0).abs() < 0.001);
        assert!((hsl.s - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_pure_blue() {
        let hsl = Hsl::from_rgb(Rgb::new(0, 0, 255));
        assert!((hsl.h - 2.0 / 3.0).abs() < 0.001);
        assert!((hsl.s - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_achromatic_stability() {
        // Grays must come back exactly: H = 0, S = 0, L = k/255.
        for k in [0u8, 1, 17, 128, 200, 254, 255] {
            let gray = Rgb::new(k, k, k);
            let hsl = Hsl::from_rgb(gray);
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
            assert!((hsl.l - k as f32 / 255.0).abs() < 1e-6);
            assert_eq!(hsl.to_rgb(), gray);
        }
    }

    #[test]
    fn test_round_trip_within_truncation() {
        let samples = [
            Rgb::new(255, 3, 13),
            Rgb::new(12, 200, 97),
            Rgb::new(1, 2, 3),
            Rgb::new(250, 250, 1),
            Rgb::new(73, 0, 255),
            Rgb::new(128, 64, 32),
        ];
        for &color in &samples {
            let back = Hsl::from_rgb(color).to_rgb();
            assert!(
                (back.r as i16 - color.r as i16).abs() <= 1
                    && (back.g as i16 - color.g as i16).abs() <= 1
                    && (back.b as i16 - color.b as i16).abs() <= 1,
                "{:?} round-tripped to {:?}",
                color,
                back
            );
        }
    }

    #[test]
    fn test_negative_hue_wraps() {
        // Red-dominant with b > g lands in the negative branch.
        let hsl = Hsl::from_rgb(Rgb::new(255, 3, 13));
        assert!(hsl.h > 0.9 && hsl.h < 1.0);
    }

    #[test]
    fn test_hex_parse() {
        let color = Rgb::from_hex("#FF8001").unwrap();
        assert_eq!(color, Rgb::new(255, 128, 1));

        let color = Rgb::from_hex("00ff00").unwrap();
        assert_eq!(color, Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_hex_parse_rejects_bad_input() {
        assert!(matches!(
            Rgb::from_hex("#FFF"),
            Err(ColorParseError::InvalidLength { len: 3 })
        ));
        assert!(matches!(
            Rgb::from_hex("#GGGGGG"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_hex_format() {
        assert_eq!(Rgb::new(255, 128, 1).to_hex(), "#FF8001");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }
}
