//! tinct - Headless color picker
//!
//! Drives a color picker's gradient area, hue and alpha sliders and text field
//! from raw host events. The color math lives in the `tinct_color` crate,
//! re-exported here as [`color`].

pub mod config;
pub mod constants;
pub mod event;
pub mod message;
pub mod picker;
pub mod replay;

pub use config::{ConfigError, LogLevel, PickerConfig, PickerOptions};
pub use event::{Event, FieldId, Key, PickerLayout, Target};
pub use message::PickerMessage;
pub use picker::{ActiveColor, DragTarget, Picker, PickerState};
pub use replay::ReplayError;

pub use tinct_color as color;
