//! Global constants for the tinct picker

/// Gap between the bound field and the picker, in pixels
pub const DEFAULT_MARGIN: f64 = 2.0;

/// Color held before any field is bound
pub const DEFAULT_COLOR: &str = "#000000";

/// Label shown on the clear button
pub const DEFAULT_CLEAR_LABEL: &str = "Clear";

/// Upper end of the hue slider, in degrees
pub const HUE_MAX: f64 = 360.0;

/// Number of steps on the alpha slider (alpha = step / ALPHA_STEPS)
pub const ALPHA_STEPS: f64 = 100.0;
