//! Color string parsing and serialization.
//!
//! Parsing never fails: anything that can't be read as a color becomes opaque
//! black. Serialization produces the `#rrggbb[aa]`, `rgb[a]()` and `hsl[a]()`
//! strings shown in the picker's text field.

use serde::{Deserialize, Serialize};

use crate::convert::hsva_to_hsla;
use crate::model::{Hsla, Hsva, Rgba};
use crate::normalize::{ColorNormalizer, CssNormalizer};

/// A concrete string format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb` or `#rrggbbaa`
    #[default]
    Hex,
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`
    Rgb,
    /// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`
    Hsl,
}

/// The format a picker instance writes, including the two adaptive modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
    /// Keep whatever format the bound field used (or the one the user toggled to)
    Auto,
    /// Hex for fully opaque colors, rgba otherwise
    Mixed,
}

impl OutputFormat {
    /// Pick the concrete format for a color with the given alpha.
    ///
    /// `detected` is the bound field's format, only consulted in `Auto` mode.
    pub fn resolve(self, alpha: f64, detected: ColorFormat) -> ColorFormat {
        match self {
            OutputFormat::Hex => ColorFormat::Hex,
            OutputFormat::Rgb => ColorFormat::Rgb,
            OutputFormat::Hsl => ColorFormat::Hsl,
            OutputFormat::Auto => detected,
            OutputFormat::Mixed if alpha == 1.0 => ColorFormat::Hex,
            OutputFormat::Mixed => ColorFormat::Rgb,
        }
    }
}

/// How alpha read from a normalized string is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaRounding {
    /// Round to two decimals, hiding float noise from the normalizer
    #[default]
    Hundredths,
    /// Keep alpha as the normalizer reported it
    Exact,
}

impl AlphaRounding {
    pub fn apply(self, alpha: f64) -> f64 {
        match self {
            AlphaRounding::Hundredths => (alpha * 100.0).round() / 100.0,
            AlphaRounding::Exact => alpha,
        }
    }
}

/// Alpha handling for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// When false, alpha is never written
    pub alpha_enabled: bool,
    /// Write alpha even for fully opaque colors
    pub force_alpha: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            alpha_enabled: true,
            force_alpha: false,
        }
    }
}

impl FormatOptions {
    fn shows_alpha(&self, alpha: f64) -> bool {
        self.alpha_enabled && (alpha < 1.0 || self.force_alpha)
    }
}

/// Parse any color string with the built-in CSS normalizer.
pub fn parse_color_string(input: &str) -> Rgba {
    parse_color_string_with(input, &CssNormalizer, AlphaRounding::default())
}

/// Parse any color string through a custom normalizer.
pub fn parse_color_string_with<N>(input: &str, normalizer: &N, rounding: AlphaRounding) -> Rgba
where
    N: ColorNormalizer + ?Sized,
{
    let normalized = normalizer.normalize(input);
    parse_normalized(&normalized, rounding)
}

/// Read channels out of a normalized `rgb(a)(...)` or `#rrggbb` string.
///
/// Falls back to opaque black if the string is neither.
pub fn parse_normalized(normalized: &str, rounding: AlphaRounding) -> Rgba {
    let normalized = normalized.trim().to_ascii_lowercase();

    let parsed = if normalized.starts_with("rgb") {
        parse_rgb_numbers(&normalized, rounding)
    } else {
        parse_hex_digits(&normalized, rounding)
    };

    parsed.unwrap_or_else(|| {
        log::debug!("Normalized color {:?} is unreadable, using black", normalized);
        Rgba::BLACK
    })
}

fn parse_rgb_numbers(s: &str, rounding: AlphaRounding) -> Option<Rgba> {
    let numbers = s
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;

    let channel = |index: usize| -> Option<u8> {
        numbers
            .get(index)
            .map(|value| value.round().clamp(0.0, 255.0) as u8)
    };

    let alpha = numbers.get(3).map_or(1.0, |a| rounding.apply(*a));
    Some(Rgba::new(channel(0)?, channel(1)?, channel(2)?, alpha))
}

fn parse_hex_digits(s: &str, rounding: AlphaRounding) -> Option<Rgba> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |index: usize| u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16).ok();
    let alpha = match hex.len() {
        8 => rounding.apply(byte(3)? as f64 / 255.0),
        _ => 1.0,
    };
    Some(Rgba::new(byte(0)?, byte(1)?, byte(2)?, alpha))
}

/// Guess the format of an existing field value from its first three characters.
pub fn detect_format(input: &str) -> ColorFormat {
    let prefix = input
        .chars()
        .take(3)
        .collect::<String>()
        .to_ascii_lowercase();

    match prefix.as_str() {
        "rgb" => ColorFormat::Rgb,
        "hsl" => ColorFormat::Hsl,
        _ => ColorFormat::Hex,
    }
}

/// Serialize as `#rrggbb`, or `#rrggbbaa` when alpha is shown.
///
/// The alpha byte is truncated, not rounded.
pub fn rgba_to_hex(rgba: Rgba, options: FormatOptions) -> String {
    let mut hex = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    if options.shows_alpha(rgba.a) {
        let alpha = (rgba.a * 255.0) as u8;
        hex.push_str(&format!("{:02x}", alpha));
    }
    hex
}

/// Serialize as `rgb(r, g, b)` or `rgba(r, g, b, a)`.
pub fn rgba_to_string(rgba: Rgba, options: FormatOptions) -> String {
    if options.shows_alpha(rgba.a) {
        format!("rgba({}, {}, {}, {})", rgba.r, rgba.g, rgba.b, rgba.a)
    } else {
        format!("rgb({}, {}, {})", rgba.r, rgba.g, rgba.b)
    }
}

/// Serialize as `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
pub fn hsla_to_string(hsla: Hsla, options: FormatOptions) -> String {
    if options.shows_alpha(hsla.a) {
        format!("hsla({}, {}%, {}%, {})", hsla.h, hsla.s, hsla.l, hsla.a)
    } else {
        format!("hsl({}, {}%, {}%)", hsla.h, hsla.s, hsla.l)
    }
}

/// Serialize a color held as both RGBA and HSVA in a concrete format.
///
/// HSL output is derived from the HSVA view so hue survives for greys.
pub fn format_color(rgba: Rgba, hsva: Hsva, format: ColorFormat, options: FormatOptions) -> String {
    match format {
        ColorFormat::Hex => rgba_to_hex(rgba, options),
        ColorFormat::Rgb => rgba_to_string(rgba, options),
        ColorFormat::Hsl => hsla_to_string(hsva_to_hsla(hsva), options),
    }
}
