//! Color value types.
//!
//! [`Rgba`] is the stored representation, [`Hsva`] drives the gradient area and
//! hue slider, and [`Hsla`] only exists on the way out to `hsl()` strings.

use serde::{Deserialize, Serialize};

/// Clamp an alpha value into `[0, 1]`, mapping NaN to fully opaque.
pub(crate) fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() {
        1.0
    } else {
        a.clamp(0.0, 1.0)
    }
}

/// Red, green and blue channels (0-255) plus alpha (0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Opaque black, the fallback for anything that can't be parsed.
    pub const BLACK: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };

    /// Create a color, clamping alpha into range.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: clamp_alpha(a),
        }
    }

    /// Create an opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same channels with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: clamp_alpha(a),
            ..self
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Hue in degrees (0-360), saturation and value in percent (0-100), alpha (0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

impl Hsva {
    pub fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self { h, s, v, a }
    }
}

impl Default for Hsva {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// Hue in degrees (0-360), saturation and lightness in percent (0-100), alpha (0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Rgba::default(), Rgba::BLACK);
        assert!(Rgba::default().is_opaque());
        assert_eq!(Hsva::default(), Hsva::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_alpha_is_clamped() {
        assert_eq!(Rgba::new(1, 2, 3, 1.5).a, 1.0);
        assert_eq!(Rgba::new(1, 2, 3, -0.2).a, 0.0);
        assert_eq!(Rgba::new(1, 2, 3, f64::NAN).a, 1.0);
        assert_eq!(Rgba::rgb(1, 2, 3).with_alpha(0.25).a, 0.25);
    }

    #[test]
    fn test_rgba_json_shape() {
        let json = serde_json::to_string(&Rgba::new(255, 0, 0, 0.5)).unwrap();
        assert_eq!(json, r#"{"r":255,"g":0,"b":0,"a":0.5}"#);

        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgba::new(255, 0, 0, 0.5));
    }
}
