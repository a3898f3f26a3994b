//! Configuration support for tinct pickers.
//!
//! [`PickerConfig`] is the complete configuration of one picker instance and can
//! be exported and imported as JSON. [`PickerOptions`] is a partial update in
//! which every field is optional; [`PickerConfig::apply`] validates and merges
//! each field on its own, so one bad value never discards the others.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tinct_color::{AlphaRounding, FormatOptions, OutputFormat};

use crate::constants::{DEFAULT_CLEAR_LABEL, DEFAULT_COLOR, DEFAULT_MARGIN};

/// Log level setting for the replay host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Clear button settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearButton {
    /// Whether the button is shown when the picker opens
    #[serde(default)]
    pub show: bool,

    /// Button label
    #[serde(default = "default_clear_label")]
    pub label: String,
}

fn default_clear_label() -> String {
    DEFAULT_CLEAR_LABEL.to_string()
}

impl Default for ClearButton {
    fn default() -> Self {
        Self {
            show: false,
            label: default_clear_label(),
        }
    }
}

/// Complete configuration of one picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Format written to the bound field
    #[serde(default)]
    pub format: OutputFormat,

    /// Alpha support; when disabled alpha is stripped from every format
    #[serde(default = "default_alpha")]
    pub alpha: bool,

    /// Write alpha even when the color is fully opaque
    #[serde(default)]
    pub force_alpha: bool,

    /// Gap between the bound field and the picker, in pixels
    #[serde(default = "default_margin")]
    pub margin: f64,

    /// Color strings offered as one-click swatches
    #[serde(default)]
    pub swatches: Vec<String>,

    /// Clear button settings
    #[serde(default)]
    pub clear_button: ClearButton,

    /// Rounding applied to alpha when parsing strings
    #[serde(default)]
    pub alpha_rounding: AlphaRounding,

    /// Color held before any field is bound
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_alpha() -> bool {
    true
}

fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl PickerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            format: OutputFormat::default(),
            alpha: default_alpha(),
            force_alpha: false,
            margin: default_margin(),
            swatches: Vec::new(),
            clear_button: ClearButton::default(),
            alpha_rounding: AlphaRounding::default(),
            default_color: default_color(),
            log_level: LogLevel::default(),
        }
    }

    /// Alpha handling for the color codec.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            alpha_enabled: self.alpha,
            force_alpha: self.force_alpha,
        }
    }

    /// Merge a partial update into this configuration.
    ///
    /// Each field is validated independently; invalid values are logged and the
    /// previous value is kept. `format_toggle: true` is applied after `format`
    /// and switches the format to [`OutputFormat::Auto`].
    pub fn apply(&mut self, options: PickerOptions) {
        if let Some(format) = options.format {
            self.format = format;
        }

        if options.format_toggle == Some(true) {
            self.format = OutputFormat::Auto;
        }

        if let Some(alpha) = options.alpha {
            self.alpha = alpha;
        }

        if let Some(force_alpha) = options.force_alpha {
            self.force_alpha = force_alpha;
        }

        if let Some(margin) = options.margin {
            match margin.to_f64() {
                Some(value) => self.margin = value,
                None => log::warn!(
                    "Ignoring invalid margin {:?}, keeping {}",
                    margin,
                    self.margin
                ),
            }
        }

        if let Some(swatches) = options.swatches {
            self.swatches = swatches;
        }

        if let Some(clear_button) = options.clear_button {
            if let Some(show) = clear_button.show {
                self.clear_button.show = show;
            }
            if let Some(label) = clear_button.label.filter(|label| !label.is_empty()) {
                self.clear_button.label = label;
            }
        }

        if let Some(rounding) = options.alpha_rounding {
            self.alpha_rounding = rounding;
        }

        if let Some(color) = options.default_color {
            if color.trim().is_empty() {
                log::warn!("Ignoring empty default color, keeping {}", self.default_color);
            } else {
                self.default_color = color;
            }
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A number that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Number(f64),
    Text(String),
}

impl NumberLike {
    /// The finite numeric value, if there is one.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            NumberLike::Number(value) => Some(*value),
            NumberLike::Text(text) => text.trim().parse::<f64>().ok(),
        };
        value.filter(|value| value.is_finite())
    }
}

/// Partial clear button update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearButtonOptions {
    #[serde(default)]
    pub show: Option<bool>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Partial configuration update; absent fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    pub format: Option<OutputFormat>,
    /// Show the format toggle; turning it on implies the `auto` format
    pub format_toggle: Option<bool>,
    pub alpha: Option<bool>,
    pub force_alpha: Option<bool>,
    pub margin: Option<NumberLike>,
    pub swatches: Option<Vec<String>>,
    pub clear_button: Option<ClearButtonOptions>,
    pub alpha_rounding: Option<AlphaRounding>,
    pub default_color: Option<String>,
}

impl PickerOptions {
    /// Deserialize a partial update from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.format, OutputFormat::Hex);
        assert!(config.alpha);
        assert!(!config.force_alpha);
        assert_eq!(config.margin, DEFAULT_MARGIN);
        assert!(config.swatches.is_empty());
        assert!(!config.clear_button.show);
        assert_eq!(config.clear_button.label, "Clear");
        assert_eq!(config.default_color, "#000000");
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = PickerConfig::new();
        config.format = OutputFormat::Mixed;
        config.swatches = vec!["#264653".to_string(), "rgb(42, 157, 143)".to_string()];

        let json = config.to_json().unwrap();
        let loaded = PickerConfig::from_json(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let config = PickerConfig::from_json(r#"{"version": 1, "format": "rgb"}"#).unwrap();
        assert_eq!(config.format, OutputFormat::Rgb);
        assert!(config.alpha);
        assert_eq!(config.margin, DEFAULT_MARGIN);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_version_too_new() {
        let result = PickerConfig::from_json(r#"{"version": 99}"#);
        assert!(matches!(
            result,
            Err(ConfigError::VersionTooNew {
                file_version: 99,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_json() {
        let result = PickerConfig::from_json("not json");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_apply_merges_fields_independently() {
        let mut config = PickerConfig::new();
        let options = PickerOptions::from_json(
            r#"{"format": "hsl", "alpha": false, "margin": "abc", "swatches": ["red"]}"#,
        )
        .unwrap();

        config.apply(options);

        assert_eq!(config.format, OutputFormat::Hsl);
        assert!(!config.alpha);
        assert_eq!(config.margin, DEFAULT_MARGIN);
        assert_eq!(config.swatches, vec!["red".to_string()]);
    }

    #[test]
    fn test_apply_margin_forms() {
        let mut config = PickerConfig::new();

        config.apply(PickerOptions::from_json(r#"{"margin": 8}"#).unwrap());
        assert_eq!(config.margin, 8.0);

        config.apply(PickerOptions::from_json(r#"{"margin": " 12.5 "}"#).unwrap());
        assert_eq!(config.margin, 12.5);

        config.apply(PickerOptions {
            margin: Some(NumberLike::Number(f64::INFINITY)),
            ..Default::default()
        });
        assert_eq!(config.margin, 12.5);
    }

    #[test]
    fn test_format_toggle_implies_auto() {
        let mut config = PickerConfig::new();
        config.apply(PickerOptions {
            format: Some(OutputFormat::Rgb),
            format_toggle: Some(true),
            ..Default::default()
        });
        assert_eq!(config.format, OutputFormat::Auto);

        config.apply(PickerOptions {
            format_toggle: Some(false),
            ..Default::default()
        });
        assert_eq!(config.format, OutputFormat::Auto);
    }

    #[test]
    fn test_clear_button_partial_update() {
        let mut config = PickerConfig::new();
        config.apply(
            PickerOptions::from_json(r#"{"clear_button": {"show": true, "label": ""}}"#).unwrap(),
        );
        assert!(config.clear_button.show);
        assert_eq!(config.clear_button.label, "Clear");

        config.apply(
            PickerOptions::from_json(r#"{"clear_button": {"label": "Reset"}}"#).unwrap(),
        );
        assert!(config.clear_button.show);
        assert_eq!(config.clear_button.label, "Reset");
    }

    #[test]
    fn test_empty_default_color_is_ignored() {
        let mut config = PickerConfig::new();
        config.apply(PickerOptions {
            default_color: Some("  ".to_string()),
            ..Default::default()
        });
        assert_eq!(config.default_color, "#000000");
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    }
}
