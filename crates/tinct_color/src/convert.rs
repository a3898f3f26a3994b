//! Color space conversions between RGBA, HSVA and HSLA.
//!
//! Every function here is pure and total. Rounding follows what the picker
//! displays: RGB channels and HSV/HSL percentages are rounded to whole numbers,
//! hue from RGB is floored to whole degrees.
//!
//! That rounding makes RGBA -> HSVA -> RGBA lossy: any channel can move by up
//! to 5 (e.g. `[0, 89, 254]` comes back as `[0, 94, 255]`). Black, white, the
//! primaries and secondaries, mid grey and orange come back exactly. Alpha is
//! never touched.

use crate::model::{Hsla, Hsva, Rgba};

/// Round a 0.0-1.0 channel to 0-255.
fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert HSVA to RGBA.
///
/// # Arguments
/// * `hsva` - Hue in degrees, saturation and value in percent. Saturation and
///   value outside 0-100 are clamped.
///
/// # Returns
/// RGBA with each channel rounded to the nearest integer; alpha is unchanged.
pub fn hsva_to_rgba(hsva: Hsva) -> Rgba {
    let saturation = hsva.s.clamp(0.0, 100.0) / 100.0;
    let value = hsva.v.clamp(0.0, 100.0) / 100.0;
    let chroma = saturation * value;
    let hue_by_60 = hsva.h / 60.0;
    let x = chroma * (1.0 - (hue_by_60.rem_euclid(2.0) - 1.0).abs());
    let m = value - chroma;

    let c = chroma + m;
    let x = x + m;

    let (r, g, b) = match (hue_by_60.floor() as i64).rem_euclid(6) {
        0 => (c, x, m),
        1 => (x, c, m),
        2 => (m, c, x),
        3 => (m, x, c),
        4 => (x, m, c),
        _ => (c, m, x),
    };

    Rgba {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
        a: hsva.a,
    }
}

/// Convert RGBA to HSVA.
///
/// Achromatic colors (all channels equal) get hue 0 and saturation 0.
/// Hue is floored to whole degrees, saturation and value are rounded percentages.
pub fn rgba_to_hsva(rgba: Rgba) -> Hsva {
    let red = rgba.r as f64 / 255.0;
    let green = rgba.g as f64 / 255.0;
    let blue = rgba.b as f64 / 255.0;
    let xmax = red.max(green).max(blue);
    let xmin = red.min(green).min(blue);
    let chroma = xmax - xmin;
    let value = xmax;

    let mut hue = 0.0;
    let mut saturation = 0.0;

    if chroma > 0.0 {
        // On ties the later channel wins; both formulas agree there.
        hue = if xmax == blue {
            4.0 + (red - green) / chroma
        } else if xmax == green {
            2.0 + (blue - red) / chroma
        } else {
            (green - blue) / chroma
        };
        saturation = chroma / xmax;
    }

    let hue = (hue * 60.0).floor();

    Hsva {
        h: if hue < 0.0 { hue + 360.0 } else { hue },
        s: (saturation * 100.0).round(),
        v: (value * 100.0).round(),
        a: rgba.a,
    }
}

/// Convert HSVA to HSLA.
///
/// HSL saturation is undefined for pure black and pure white lightness and is
/// reported as 0 there.
pub fn hsva_to_hsla(hsva: Hsva) -> Hsla {
    let value = hsva.v.clamp(0.0, 100.0) / 100.0;
    let lightness = value * (1.0 - hsva.s.clamp(0.0, 100.0) / 100.0 / 2.0);

    let saturation = if lightness > 0.0 && lightness < 1.0 {
        ((value - lightness) / lightness.min(1.0 - lightness) * 100.0).round()
    } else {
        0.0
    };

    Hsla {
        h: hsva.h,
        s: saturation,
        l: (lightness * 100.0).round(),
        a: hsva.a,
    }
}
