//! The color a picker is editing, held as RGBA and HSVA together.

use tinct_color::{
    ColorFormat, FormatOptions, Hsva, Rgba, format_color, hsva_to_rgba, rgba_to_hsva,
};

/// Active color of one picker.
///
/// Both views are always updated together. The HSVA view is the one the
/// gradient and hue slider work in, so it keeps hue and saturation for greys
/// where the RGBA view has lost them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveColor {
    rgba: Rgba,
    hsva: Hsva,
}

impl ActiveColor {
    pub fn from_rgba(rgba: Rgba) -> Self {
        Self {
            rgba,
            hsva: rgba_to_hsva(rgba),
        }
    }

    pub fn from_hsva(hsva: Hsva) -> Self {
        Self {
            rgba: hsva_to_rgba(hsva),
            hsva,
        }
    }

    /// Change alpha without touching the color channels.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.rgba = self.rgba.with_alpha(alpha);
        self.hsva.a = self.rgba.a;
    }

    pub fn rgba(&self) -> Rgba {
        self.rgba
    }

    pub fn hsva(&self) -> Hsva {
        self.hsva
    }

    /// Serialize in a concrete format.
    pub fn format(&self, format: ColorFormat, options: FormatOptions) -> String {
        format_color(self.rgba, self.hsva, format, options)
    }
}

impl Default for ActiveColor {
    fn default() -> Self {
        Self::from_rgba(Rgba::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_stay_in_sync() {
        let color = ActiveColor::from_hsva(Hsva::new(120.0, 100.0, 100.0, 1.0));
        assert_eq!(color.rgba(), Rgba::rgb(0, 255, 0));

        let color = ActiveColor::from_rgba(Rgba::rgb(0, 0, 255));
        assert_eq!(color.hsva(), Hsva::new(240.0, 100.0, 100.0, 1.0));
    }

    #[test]
    fn test_set_alpha() {
        let mut color = ActiveColor::from_rgba(Rgba::rgb(255, 0, 0));
        color.set_alpha(0.25);
        assert_eq!(color.rgba(), Rgba::new(255, 0, 0, 0.25));
        assert_eq!(color.hsva().a, 0.25);

        color.set_alpha(4.0);
        assert_eq!(color.rgba().a, 1.0);
        assert_eq!(color.hsva().a, 1.0);
    }

    #[test]
    fn test_grey_keeps_hue_in_hsl() {
        let color = ActiveColor::from_hsva(Hsva::new(200.0, 0.0, 50.0, 1.0));
        let hsl = color.format(ColorFormat::Hsl, FormatOptions::default());
        assert_eq!(hsl, "hsl(200, 0%, 50%)");
    }

    #[test]
    fn test_default_is_black() {
        let color = ActiveColor::default();
        assert_eq!(color.format(ColorFormat::Hex, FormatOptions::default()), "#000000");
    }
}
