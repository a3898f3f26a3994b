//! Picker lifecycle state.

use serde::{Deserialize, Serialize};

/// What a held pointer is currently dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragTarget {
    Gradient,
    Hue,
    Alpha,
}

/// Lifecycle of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Closed,
    Open {
        /// Drag in progress, if any
        dragging: Option<DragTarget>,
    },
}

impl PickerState {
    pub fn is_open(&self) -> bool {
        matches!(self, PickerState::Open { .. })
    }

    /// The drag in progress, if any.
    pub fn dragging(&self) -> Option<DragTarget> {
        match self {
            PickerState::Open { dragging } => *dragging,
            PickerState::Closed => None,
        }
    }

    /// Check if a specific target is being dragged.
    pub fn is_dragging(&self, target: DragTarget) -> bool {
        self.dragging() == Some(target)
    }

    /// Start dragging. Does nothing while closed.
    pub fn start_drag(&mut self, target: DragTarget) {
        if let PickerState::Open { dragging } = self {
            *dragging = Some(target);
        }
    }

    /// End the drag operation.
    pub fn stop_drag(&mut self) {
        if let PickerState::Open { dragging } = self {
            *dragging = None;
        }
    }
}
