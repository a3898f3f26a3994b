//! Gradient-area position mapping.
//!
//! The gradient area is a rectangle where X is saturation (left 0%, right 100%)
//! and Y is value (top 100%, bottom 0%). Positions handed to these functions are
//! area-local unless noted otherwise, and are always clamped into the area.

use serde::{Deserialize, Serialize};

use crate::model::Hsva;

/// A 2D point in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen bounding box of the gradient area (or a slider track).
///
/// `origin_x`/`origin_y` are in page coordinates; width and height in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub origin_x: f64,
    #[serde(default)]
    pub origin_y: f64,
}

impl AreaGeometry {
    /// Create an area anchored at the page origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    /// Move the area to a page position.
    pub fn at(mut self, origin_x: f64, origin_y: f64) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    /// Clamp an area-local point into `[0, width] x [0, height]`.
    pub fn clamp(&self, x: f64, y: f64) -> Point {
        Point::new(
            clamp_axis(x, self.width.max(0.0)),
            clamp_axis(y, self.height.max(0.0)),
        )
    }

    /// Where a page X coordinate falls along the area, as 0.0-1.0.
    ///
    /// Used for the hue and alpha slider tracks.
    pub fn horizontal_ratio(&self, page_x: f64) -> f64 {
        ratio(page_x - self.origin_x, self.width)
    }
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// `value / extent` clamped to 0.0-1.0; a degenerate extent maps to 0.
fn ratio(value: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        clamp_axis(value / extent, 1.0)
    } else {
        0.0
    }
}

/// Arrow-key directions for moving the gradient marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// One-pixel offset for this direction (screen Y grows downwards).
    pub fn offset(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// Convert a page-space pointer position into a clamped area-local point.
///
/// `scroll_top` is the scroll offset of a scrolling container the picker lives
/// in, if any; it is added to Y.
pub fn clamp_to_area(
    page_x: f64,
    page_y: f64,
    area: &AreaGeometry,
    scroll_top: Option<f64>,
) -> Point {
    let x = page_x - area.origin_x;
    let y = page_y - area.origin_y + scroll_top.unwrap_or(0.0);
    area.clamp(x, y)
}

/// Map an area-local position to a color.
///
/// Hue and alpha come from the sliders, not from the position.
pub fn position_to_hsva(x: f64, y: f64, area: &AreaGeometry, hue: f64, alpha: f64) -> Hsva {
    let point = area.clamp(x, y);
    Hsva {
        h: hue,
        s: ratio(point.x, area.width) * 100.0,
        v: 100.0 - ratio(point.y, area.height) * 100.0,
        a: alpha,
    }
}

/// Where the marker sits for a color set without dragging.
pub fn hsva_to_position(hsva: Hsva, area: &AreaGeometry) -> Point {
    let saturation = hsva.s.clamp(0.0, 100.0);
    let value = hsva.v.clamp(0.0, 100.0);
    area.clamp(
        area.width * saturation / 100.0,
        area.height - area.height * value / 100.0,
    )
}

/// Move the marker one pixel in `direction`, staying inside the area.
pub fn nudge(point: Point, direction: Direction, area: &AreaGeometry) -> Point {
    let (dx, dy) = direction.offset();
    area.clamp(point.x + dx, point.y + dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> AreaGeometry {
        AreaGeometry::new(100.0, 100.0)
    }

    #[test]
    fn test_corners() {
        let top_left = position_to_hsva(0.0, 0.0, &square(), 120.0, 1.0);
        assert_eq!(top_left, Hsva::new(120.0, 0.0, 100.0, 1.0));

        let bottom_right = position_to_hsva(100.0, 100.0, &square(), 120.0, 1.0);
        assert_eq!(bottom_right, Hsva::new(120.0, 100.0, 0.0, 1.0));
    }

    #[test]
    fn test_out_of_bounds_is_clamped() {
        let outside = position_to_hsva(-10.0, 500.0, &square(), 120.0, 1.0);
        let corner = position_to_hsva(0.0, 100.0, &square(), 120.0, 1.0);
        assert_eq!(outside, corner);
    }

    #[test]
    fn test_non_square_area() {
        let area = AreaGeometry::new(200.0, 50.0);
        let hsva = position_to_hsva(50.0, 10.0, &area, 10.0, 0.5);
        assert_eq!(hsva, Hsva::new(10.0, 25.0, 80.0, 0.5));
    }

    #[test]
    fn test_degenerate_area() {
        let area = AreaGeometry::new(0.0, 0.0);
        let hsva = position_to_hsva(5.0, 5.0, &area, 0.0, 1.0);
        assert_eq!(hsva, Hsva::new(0.0, 0.0, 100.0, 1.0));
        assert_eq!(area.horizontal_ratio(3.0), 0.0);
    }

    #[test]
    fn test_hsva_to_position_inverts() {
        let area = AreaGeometry::new(200.0, 150.0);
        let point = hsva_to_position(Hsva::new(0.0, 25.0, 40.0, 1.0), &area);
        assert_eq!(point, Point::new(50.0, 90.0));

        let hsva = position_to_hsva(point.x, point.y, &area, 0.0, 1.0);
        assert!((hsva.s - 25.0).abs() < 1e-9);
        assert!((hsva.v - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_to_area_page_coordinates() {
        let area = AreaGeometry::new(100.0, 100.0).at(20.0, 300.0);
        assert_eq!(clamp_to_area(70.0, 350.0, &area, None), Point::new(50.0, 50.0));
        assert_eq!(clamp_to_area(0.0, 0.0, &area, None), Point::new(0.0, 0.0));
        assert_eq!(
            clamp_to_area(500.0, 900.0, &area, None),
            Point::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_clamp_to_area_scroll_offset() {
        let area = AreaGeometry::new(100.0, 100.0).at(0.0, 100.0);
        assert_eq!(
            clamp_to_area(10.0, 120.0, &area, Some(30.0)),
            Point::new(10.0, 50.0)
        );
    }

    #[test]
    fn test_nudge() {
        let area = square();
        let start = Point::new(50.0, 50.0);
        assert_eq!(nudge(start, Direction::Up, &area), Point::new(50.0, 49.0));
        assert_eq!(nudge(start, Direction::Down, &area), Point::new(50.0, 51.0));
        assert_eq!(nudge(start, Direction::Left, &area), Point::new(49.0, 50.0));
        assert_eq!(nudge(start, Direction::Right, &area), Point::new(51.0, 50.0));
    }

    #[test]
    fn test_nudge_stays_inside() {
        let area = square();
        assert_eq!(
            nudge(Point::new(0.0, 0.0), Direction::Up, &area),
            Point::new(0.0, 0.0)
        );
        assert_eq!(
            nudge(Point::new(100.0, 100.0), Direction::Right, &area),
            Point::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_horizontal_ratio() {
        let track = AreaGeometry::new(200.0, 10.0).at(100.0, 0.0);
        assert_eq!(track.horizontal_ratio(100.0), 0.0);
        assert_eq!(track.horizontal_ratio(200.0), 0.5);
        assert_eq!(track.horizontal_ratio(400.0), 1.0);
        assert_eq!(track.horizontal_ratio(-50.0), 0.0);
    }
}
