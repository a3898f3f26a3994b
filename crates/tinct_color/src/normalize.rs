//! Color string normalization.
//!
//! Parsing is done in two steps: a [`ColorNormalizer`] turns whatever the user
//! typed into one of two canonical shapes (`#rrggbb` or `rgba(r, g, b, a)`),
//! and the codec reads channels out of that canonical form. Hosts that already
//! have a color resolver (a browser canvas, a toolkit's CSS engine) can plug it
//! in; [`CssNormalizer`] covers CSS hex, functional and named colors on its own.

use crate::model::Rgba;

/// Canonical form of anything that doesn't resolve.
pub(crate) const FALLBACK_NORMALIZED: &str = "#000000";

/// Resolves arbitrary strings to a canonical color string.
///
/// Implementations must return either `#rrggbb` or `rgba(r, g, b, a)` for every
/// input, using `#000000` for strings that are not colors.
pub trait ColorNormalizer {
    fn normalize(&self, input: &str) -> String;
}

impl<F> ColorNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, input: &str) -> String {
        self(input)
    }
}

/// Built-in normalizer for CSS color syntax.
///
/// Supports `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()`,
/// `hsl()`/`hsla()` (comma separated, or space separated with an optional
/// `/ alpha`), the CSS named colors and `transparent`. Values are resolved by
/// `csscolorparser`; the argument list is checked against CSS syntax first,
/// since that parser also accepts forms a browser rejects.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssNormalizer;

impl CssNormalizer {
    /// Resolve a CSS color string, or `None` if it isn't one.
    pub fn resolve(&self, input: &str) -> Option<Rgba> {
        let input = input.trim().to_ascii_lowercase();
        if !is_css_color_syntax(&input) {
            return None;
        }

        let color = csscolorparser::parse(&input).ok()?;
        let [r, g, b, _] = color.to_rgba8();
        Some(Rgba::new(r, g, b, color.a))
    }
}

impl ColorNormalizer for CssNormalizer {
    fn normalize(&self, input: &str) -> String {
        match self.resolve(input) {
            Some(color) => serialize(color),
            None => {
                log::debug!("Unrecognized color string {:?}, resolving to black", input);
                FALLBACK_NORMALIZED.to_string()
            }
        }
    }
}

fn serialize(color: Rgba) -> String {
    if color.is_opaque() {
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    } else {
        let alpha = (color.a * 1000.0).round() / 1000.0;
        format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, alpha)
    }
}

/// Shape check on a trimmed, lowercased string.
fn is_css_color_syntax(input: &str) -> bool {
    if input.starts_with('#') {
        return true;
    }

    let Some(open) = input.find('(') else {
        // Keywords only; bare hex digits ("fed", "c0ffee") need a '#'
        return input.chars().all(|c| c.is_ascii_alphabetic())
            && !input.chars().all(|c| c.is_ascii_hexdigit());
    };

    let Some(body) = input[open + 1..].strip_suffix(')') else {
        return false;
    };
    let Some((channels, _)) = split_args(body) else {
        return false;
    };

    match input[..open].trim_end() {
        // Channels are all numbers or all percentages
        "rgb" | "rgba" => {
            let percents = channels.iter().filter(|c| c.ends_with('%')).count();
            percents == 0 || percents == channels.len()
        }
        "hsl" | "hsla" => !channels[0].ends_with('%'),
        _ => false,
    }
}

/// Split functional notation arguments into three components and an optional alpha.
///
/// Comma syntax takes exactly three or four non-empty arguments and no `/`.
/// Space syntax takes exactly three components, with alpha only after `/`.
fn split_args(body: &str) -> Option<([&str; 3], Option<&str>)> {
    let body = body.trim();

    if body.contains(',') {
        if body.contains('/') {
            return None;
        }
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.iter().any(|part| !is_single_token(part)) {
            return None;
        }
        return match parts.as_slice() {
            &[a, b, c] => Some(([a, b, c], None)),
            &[a, b, c, alpha] => Some(([a, b, c], Some(alpha))),
            _ => None,
        };
    }

    let (main, alpha) = match body.split_once('/') {
        Some((main, alpha)) => {
            let alpha = alpha.trim();
            if !is_single_token(alpha) || alpha.contains('/') {
                return None;
            }
            (main, Some(alpha))
        }
        None => (body, None),
    };

    match main.split_whitespace().collect::<Vec<_>>().as_slice() {
        &[a, b, c] => Some(([a, b, c], alpha)),
        _ => None,
    }
}

fn is_single_token(part: &str) -> bool {
    !part.is_empty() && !part.contains(char::is_whitespace)
}
