//! Replaying recorded event scripts against a picker.
//!
//! A script is a JSON array of [`Event`]s. Every event is fed to the picker in
//! order and the notifications are collected, which makes it possible to drive
//! a picker headlessly and diff its output.

use std::path::Path;

use tinct_color::ColorNormalizer;

use crate::config::ConfigError;
use crate::event::Event;
use crate::message::PickerMessage;
use crate::picker::Picker;

/// Errors from loading or replaying a script.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid event script: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Parse an event script from JSON.
pub fn parse_script(json: &str) -> Result<Vec<Event>, ReplayError> {
    Ok(serde_json::from_str(json)?)
}

/// Load an event script from a file.
pub fn load_script(path: &Path) -> Result<Vec<Event>, ReplayError> {
    let json = std::fs::read_to_string(path)?;
    let events = parse_script(&json)?;
    log::info!("Loaded {} events from {:?}", events.len(), path);
    Ok(events)
}

/// Feed every event to the picker and collect the notifications in order.
pub fn replay<N, I>(picker: &mut Picker<N>, events: I) -> Vec<PickerMessage>
where
    N: ColorNormalizer,
    I: IntoIterator<Item = Event>,
{
    let mut messages = Vec::new();
    for (index, event) in events.into_iter().enumerate() {
        log::trace!("Replay: event {} {:?}", index, event);
        messages.extend(picker.handle(event));
    }
    log::debug!("Replay: produced {} messages", messages.len());
    messages
}

/// Render notifications as JSON lines.
pub fn render_messages(messages: &[PickerMessage]) -> Result<String, ReplayError> {
    let mut output = String::new();
    for message in messages {
        output.push_str(&serde_json::to_string(message)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;

    const SCRIPT: &str = r##"[
        {"type": "open", "field": "bg", "value": "#ff0000",
         "layout": {"gradient": {"width": 100, "height": 100}}},
        {"type": "pointer_pressed", "target": "gradient", "position": {"x": 0, "y": 0}},
        {"type": "pointer_released"},
        {"type": "close"}
    ]"##;

    #[test]
    fn test_replay_script() {
        let events = parse_script(SCRIPT).unwrap();
        assert_eq!(events.len(), 4);

        let mut picker = Picker::new(PickerConfig::new());
        let messages = replay(&mut picker, events);
        let output = render_messages(&messages).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"type":"opened","field":"bg"}"#,
                r##"{"type":"color_changed","field":"bg","value":"#ffffff"}"##,
                r##"{"type":"committed","field":"bg","value":"#ffffff"}"##,
                r#"{"type":"closed","field":"bg"}"#,
            ]
        );
    }

    #[test]
    fn test_invalid_script() {
        let result = parse_script(r#"[{"type": "explode"}]"#);
        assert!(matches!(result, Err(ReplayError::Json(_))));
    }

    #[test]
    fn test_missing_script_file() {
        let result = load_script(Path::new("/nonexistent/tinct/events.json"));
        assert!(matches!(result, Err(ReplayError::Io(_))));
    }
}
