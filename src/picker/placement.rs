//! Positioning the picker next to its bound field.
//!
//! The picker opens `margin` pixels below the field, either relative to the
//! document or to a scrolling container it is mounted in. When it would run
//! off the right edge it aligns with the field's right edge instead, and when
//! it would run off the bottom it opens above the field.

use serde::{Deserialize, Serialize};
use tinct_color::{AreaGeometry, Point};

use crate::event::PickerLayout;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A scrolling element the picker is mounted inside.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollContainer {
    /// Bounding box, relative to the viewport
    pub rect: Rect,
    /// Visible content width
    pub client_width: f64,
    /// Visible content height
    pub client_height: f64,
    pub scroll_top: f64,
    #[serde(default)]
    pub margin_top: f64,
    #[serde(default)]
    pub border_top: f64,
}

/// Everything placement needs to know about the page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlacementRequest {
    /// Bound field's bounding box, relative to the viewport
    pub field: Rect,
    /// Rendered picker size
    pub picker: Size,
    /// Visible document size
    pub viewport: Size,
    /// Document vertical scroll
    #[serde(default)]
    pub scroll_y: f64,
    #[serde(default)]
    pub container: Option<ScrollContainer>,
}

/// Where the picker goes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    /// Left edge, relative to the document or container
    pub left: f64,
    /// Top edge, relative to the document or container
    pub top: f64,
    /// Aligned to the field's right edge instead of its left
    pub flipped_left: bool,
    /// Opened above the field instead of below
    pub flipped_top: bool,
    /// Page position of the container's content origin
    pub offset: Point,
    /// Container scroll offset to apply to pointer Y
    pub scroll_top: Option<f64>,
}

impl Placement {
    /// Page-space geometry of a rectangle given relative to the picker.
    pub fn area(&self, inner: Rect) -> AreaGeometry {
        AreaGeometry::new(inner.width, inner.height).at(
            self.left + inner.x + self.offset.x,
            self.top + inner.y + self.offset.y,
        )
    }

    /// Geometry snapshot for [`Event::Open`](crate::Event::Open) from the
    /// picker-relative rectangles of the gradient and the slider tracks.
    pub fn layout(&self, gradient: Rect, hue_track: Rect, alpha_track: Rect) -> PickerLayout {
        PickerLayout {
            gradient: self.area(gradient),
            hue_track: self.area(hue_track),
            alpha_track: self.area(alpha_track),
            scroll_top: self.scroll_top,
        }
    }
}

/// Position the picker `margin` pixels from its field.
pub fn place(request: &PlacementRequest, margin: f64) -> Placement {
    let field = request.field;
    let picker = request.picker;

    let mut placement = Placement {
        left: field.x,
        top: request.scroll_y + field.y + field.height + margin,
        ..Placement::default()
    };

    match request.container {
        Some(container) => {
            placement.offset = Point::new(
                container.rect.x,
                container.rect.y + container.border_top + request.scroll_y,
            );
            placement.left -= placement.offset.x;
            placement.top -= placement.offset.y;

            if placement.left + picker.width > container.client_width {
                placement.left += field.width - picker.width;
                placement.flipped_left = true;
            }

            if placement.top + picker.height > container.client_height - container.margin_top {
                placement.top -= field.height + picker.height + margin * 2.0;
                placement.flipped_top = true;
            }

            placement.top += container.scroll_top;
            placement.scroll_top = Some(container.scroll_top);
        }
        None => {
            if placement.left + picker.width > request.viewport.width {
                placement.left += field.width - picker.width;
                placement.flipped_left = true;
            }

            if placement.top + picker.height - request.scroll_y > request.viewport.height {
                placement.top = request.scroll_y + field.y - picker.height - margin;
                placement.flipped_top = true;
            }
        }
    }

    log::debug!(
        "Placement: left={} top={} flipped_left={} flipped_top={}",
        placement.left,
        placement.top,
        placement.flipped_left,
        placement.flipped_top
    );

    placement
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(field: Rect) -> PlacementRequest {
        PlacementRequest {
            field,
            picker: Size::new(250.0, 300.0),
            viewport: Size::new(1000.0, 800.0),
            scroll_y: 0.0,
            container: None,
        }
    }

    #[test]
    fn test_below_field() {
        let placement = place(&request(Rect::new(10.0, 100.0, 200.0, 30.0)), 2.0);
        assert_eq!(placement.left, 10.0);
        assert_eq!(placement.top, 132.0);
        assert!(!placement.flipped_left);
        assert!(!placement.flipped_top);
        assert_eq!(placement.scroll_top, None);
    }

    #[test]
    fn test_document_scroll() {
        let mut req = request(Rect::new(10.0, 100.0, 200.0, 30.0));
        req.scroll_y = 500.0;
        let placement = place(&req, 2.0);
        assert_eq!(placement.top, 632.0);
        assert!(!placement.flipped_top);
    }

    #[test]
    fn test_flip_left() {
        let placement = place(&request(Rect::new(900.0, 100.0, 200.0, 30.0)), 2.0);
        assert_eq!(placement.left, 850.0);
        assert!(placement.flipped_left);
    }

    #[test]
    fn test_flip_top() {
        let placement = place(&request(Rect::new(10.0, 600.0, 200.0, 30.0)), 2.0);
        assert_eq!(placement.top, 298.0);
        assert!(placement.flipped_top);
    }

    fn container() -> ScrollContainer {
        ScrollContainer {
            rect: Rect::new(50.0, 40.0, 520.0, 420.0),
            client_width: 500.0,
            client_height: 400.0,
            scroll_top: 20.0,
            margin_top: 0.0,
            border_top: 0.0,
        }
    }

    #[test]
    fn test_inside_container() {
        let mut req = request(Rect::new(60.0, 100.0, 100.0, 20.0));
        req.container = Some(container());

        let placement = place(&req, 2.0);
        assert_eq!(placement.left, 10.0);
        assert_eq!(placement.top, 102.0);
        assert_eq!(placement.offset, Point::new(50.0, 40.0));
        assert_eq!(placement.scroll_top, Some(20.0));

        let layout = placement.layout(
            Rect::new(0.0, 0.0, 250.0, 150.0),
            Rect::new(0.0, 160.0, 250.0, 10.0),
            Rect::new(0.0, 180.0, 250.0, 10.0),
        );
        assert_eq!(layout.gradient, AreaGeometry::new(250.0, 150.0).at(60.0, 142.0));
        assert_eq!(layout.hue_track.origin_y, 302.0);
        assert_eq!(layout.scroll_top, Some(20.0));
    }

    #[test]
    fn test_container_flip_top() {
        let mut req = request(Rect::new(60.0, 200.0, 100.0, 20.0));
        req.container = Some(container());

        let placement = place(&req, 2.0);
        assert!(placement.flipped_top);
        assert_eq!(placement.top, -122.0);
    }
}
