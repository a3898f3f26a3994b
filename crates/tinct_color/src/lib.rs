//! tinct_color - Color model and coordinate mapping for the tinct color picker
//!
//! This crate holds everything the picker computes, with no knowledge of how
//! the picker is drawn:
//! - conversions between RGBA, HSVA and HSLA ([`hsva_to_rgba`], [`rgba_to_hsva`], ...)
//! - parsing loosely formatted color strings and serializing hex/rgb/hsl output
//! - mapping gradient-area positions to saturation/value and back

mod codec;
mod convert;
mod model;
mod normalize;
mod position;

pub use codec::{
    detect_format, format_color, hsla_to_string, parse_color_string, parse_color_string_with,
    parse_normalized, rgba_to_hex, rgba_to_string, AlphaRounding, ColorFormat, FormatOptions,
    OutputFormat,
};
pub use convert::{hsva_to_hsla, hsva_to_rgba, rgba_to_hsva};
pub use model::{Hsla, Hsva, Rgba};
pub use normalize::{ColorNormalizer, CssNormalizer};
pub use position::{
    clamp_to_area, hsva_to_position, nudge, position_to_hsva, AreaGeometry, Direction, Point,
};
