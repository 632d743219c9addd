//! Rune configuration system
//!
//! Settings for text widgets are loaded from `rune.toml`, with environment
//! variables taking precedence for quick overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use rune_text::Alignment;

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "rune.toml";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuneConfig {
    /// Text appearance settings
    pub text: TextConfig,
    /// Multiline text widget behavior
    pub multiline: MultilineConfig,
}

/// Text appearance configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Font name handed to the text metrics service
    pub font: String,
    /// Text scale multiplier
    pub scale: f32,
    /// Glyph alignment inside the text block
    pub text_align: Alignment,
    /// Placement of the text block inside the widget when it is smaller
    pub box_align: Alignment,
}

/// Multiline text widget configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MultilineConfig {
    /// Enables caret, selection and editing
    pub selectable: bool,
    /// Allows buffer mutation from input (only meaningful when selectable)
    pub editable: bool,
    pub show_scrollbar: bool,
    /// Scrollbar width in pixels, reserved from the drawable area when visible
    pub scrollbar_width: f32,
    /// Minimum time between two accepted triggers of the same key
    pub repeat_delay_ms: u64,
    /// Pixels scrolled per wheel step
    pub scroll_sensitivity: f32,
    pub caret_blink_ms: u64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: "default".to_string(),
            scale: 1.0,
            text_align: Alignment::LeftTop,
            box_align: Alignment::CenterCenter,
        }
    }
}

impl Default for MultilineConfig {
    fn default() -> Self {
        Self {
            selectable: false,
            editable: true,
            show_scrollbar: true,
            scrollbar_width: 12.0,
            repeat_delay_ms: 100,
            scroll_sensitivity: 24.0,
            caret_blink_ms: 500,
        }
    }
}

impl MultilineConfig {
    pub fn repeat_delay(&self) -> Duration {
        Duration::from_millis(self.repeat_delay_ms)
    }

    pub fn caret_blink(&self) -> Duration {
        Duration::from_millis(self.caret_blink_ms)
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl RuneConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `rune.toml` from the current directory, or defaults if it is
    /// missing or malformed.
    pub fn load_or_default() -> Self {
        match Self::load_from_file(CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::Read(_)) => Self::default(),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring {CONFIG_FILE}");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Unparseable values are ignored.
    pub fn merge_with_env(&mut self) {
        self.merge_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn merge_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Text settings
        if let Some(font) = lookup("RUNE_TEXT_FONT") {
            self.text.font = font;
        }
        if let Some(scale) = lookup("RUNE_TEXT_SCALE").and_then(|v| v.parse::<f32>().ok()) {
            self.text.scale = scale;
        }
        if let Some(align) = lookup("RUNE_TEXT_ALIGN").and_then(|v| Alignment::from_name(&v)) {
            self.text.text_align = align;
        }
        if let Some(align) = lookup("RUNE_BOX_ALIGN").and_then(|v| Alignment::from_name(&v)) {
            self.text.box_align = align;
        }

        // Multiline widget settings
        if let Some(val) = lookup("RUNE_SELECTABLE") {
            self.multiline.selectable = parse_flag(&val);
        }
        if let Some(val) = lookup("RUNE_EDITABLE") {
            self.multiline.editable = parse_flag(&val);
        }
        if let Some(val) = lookup("RUNE_SHOW_SCROLLBAR") {
            self.multiline.show_scrollbar = parse_flag(&val);
        }
        if let Some(ms) = lookup("RUNE_REPEAT_DELAY_MS").and_then(|v| v.parse::<u64>().ok()) {
            self.multiline.repeat_delay_ms = ms;
        }
        if let Some(px) = lookup("RUNE_SCROLL_SENSITIVITY").and_then(|v| v.parse::<f32>().ok()) {
            self.multiline.scroll_sensitivity = px;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RuneConfig::default();
        assert_eq!(config.text.font, "default");
        assert_eq!(config.text.box_align, Alignment::CenterCenter);
        assert!(!config.multiline.selectable);
        assert!(config.multiline.editable);
        assert_eq!(config.multiline.repeat_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_toml_serialization() {
        let config = RuneConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("box_align = \"center-center\""));
        let parsed: RuneConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[text]\ntext_align = \"right-bottom\"\n\n[multiline]\nselectable = true\nrepeat_delay_ms = 40"
        )
        .unwrap();

        let config = RuneConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.text.text_align, Alignment::RightBottom);
        assert_eq!(config.text.scale, 1.0);
        assert!(config.multiline.selectable);
        assert_eq!(config.multiline.repeat_delay_ms, 40);
    }

    #[test]
    fn test_load_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = RuneConfig::load_from_file(dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(ConfigError::Read(_))));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "text = 5").unwrap();
        assert!(matches!(
            RuneConfig::load_from_file(&bad),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_merge_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("RUNE_TEXT_FONT", "mono"),
            ("RUNE_TEXT_SCALE", "1.5"),
            ("RUNE_TEXT_ALIGN", "center-top"),
            ("RUNE_BOX_ALIGN", "nowhere"),
            ("RUNE_SELECTABLE", "true"),
            ("RUNE_SHOW_SCROLLBAR", "0"),
            ("RUNE_REPEAT_DELAY_MS", "not-a-number"),
        ]);
        let mut config = RuneConfig::default();
        config.merge_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.text.font, "mono");
        assert_eq!(config.text.scale, 1.5);
        assert_eq!(config.text.text_align, Alignment::CenterTop);
        assert_eq!(config.text.box_align, Alignment::CenterCenter);
        assert!(config.multiline.selectable);
        assert!(!config.multiline.show_scrollbar);
        assert_eq!(config.multiline.repeat_delay_ms, 100);
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("RUNE_EDITABLE", "false");
        }

        let mut config = RuneConfig::default();
        config.merge_with_env();
        assert!(!config.multiline.editable);

        unsafe {
            std::env::remove_var("RUNE_EDITABLE");
        }
    }
}
