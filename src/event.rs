//! Input events delivered to a picker by its host.

use std::fmt;

use serde::{Deserialize, Serialize};
use tinct_color::{AreaGeometry, ColorFormat, Direction, Point};

/// Identifier of the text field a picker is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Geometry snapshot taken when the picker opens.
///
/// All rectangles are in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PickerLayout {
    /// Saturation/value gradient area
    pub gradient: AreaGeometry,
    /// Hue slider track
    #[serde(default)]
    pub hue_track: AreaGeometry,
    /// Alpha slider track
    #[serde(default)]
    pub alpha_track: AreaGeometry,
    /// Scroll offset of the scrolling container hosting the picker, if any
    #[serde(default)]
    pub scroll_top: Option<f64>,
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Gradient,
    Marker,
    HueSlider,
    AlphaSlider,
    /// Anywhere else inside the picker
    Picker,
    /// Outside the picker and its field
    Outside,
}

/// Keyboard keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Escape,
    Tab,
    Up,
    Down,
    Left,
    Right,
    #[serde(other)]
    Other,
}

impl Key {
    /// Marker direction for arrow keys.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Events a host feeds into [`Picker::handle`](crate::Picker::handle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Bind the picker to a field and show it
    Open {
        field: FieldId,
        value: String,
        #[serde(default)]
        layout: PickerLayout,
    },
    /// Pointer button went down, `position` in page coordinates
    PointerPressed { target: Target, position: Point },
    /// Pointer moved, `position` in page coordinates
    PointerMoved { position: Point },
    PointerReleased,
    KeyPressed { key: Key },
    /// Hue slider set directly, in degrees
    HueChanged { hue: f64 },
    /// Alpha slider set directly, 0.0-1.0
    AlphaChanged { alpha: f64 },
    /// Text typed into the picker's own input box
    TextCommitted { value: String },
    /// Swatch button pressed, index into the configured swatches
    SwatchClicked { index: usize },
    /// Format toggle changed
    FormatToggled { format: ColorFormat },
    ClearClicked,
    PreviewClicked,
    /// Close the picker, optionally restoring the field's original value
    Close {
        #[serde(default)]
        revert: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event: Event = serde_json::from_str(
            r#"{"type": "pointer_pressed", "target": "gradient", "position": {"x": 10, "y": 20}}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            Event::PointerPressed {
                target: Target::Gradient,
                position: Point::new(10.0, 20.0),
            }
        );
    }

    #[test]
    fn test_open_layout_defaults() {
        let event: Event =
            serde_json::from_str(r##"{"type": "open", "field": "bg", "value": "#fff"}"##).unwrap();
        match event {
            Event::Open { field, layout, .. } => {
                assert_eq!(field, FieldId::new("bg"));
                assert_eq!(layout, PickerLayout::default());
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_is_other() {
        let event: Event =
            serde_json::from_str(r#"{"type": "key_pressed", "key": "space"}"#).unwrap();
        assert_eq!(event, Event::KeyPressed { key: Key::Other });
        let key: Key = serde_json::from_str(r#""enter""#).unwrap();
        assert_eq!(key, Key::Other);
        assert_eq!(Key::Other.direction(), None);
        assert_eq!(Key::Up.direction(), Some(Direction::Up));
    }

    #[test]
    fn test_close_revert_defaults_false() {
        let event: Event = serde_json::from_str(r#"{"type": "close"}"#).unwrap();
        assert_eq!(event, Event::Close { revert: false });
    }
}
