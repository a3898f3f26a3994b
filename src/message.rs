//! Notifications a picker emits back to its host.

use serde::{Deserialize, Serialize};

use crate::event::FieldId;

/// Picker notifications, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PickerMessage {
    /// The picker was bound to a field and shown
    Opened { field: FieldId },
    /// The field's value changed live (pointer drag, slider, text, swatch)
    ColorChanged { field: FieldId, value: String },
    /// The picker closed with a value different from the one it opened with
    Committed { field: FieldId, value: String },
    Closed { field: FieldId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_json_line() {
        let message = PickerMessage::ColorChanged {
            field: FieldId::new("bg"),
            value: "#ff0000".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&message).unwrap(),
            r##"{"type":"color_changed","field":"bg","value":"#ff0000"}"##
        );
    }
}
