//! Settings structs, load and save.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::arrival::{UnitLabels, DEFAULT_ARRIVAL_ERROR};
use crate::detail::DEFAULT_COORDINATE_PRECISION;

/// Camera zoom used when centering on the marker.
pub const DEFAULT_MARKER_ZOOM: f32 = 18.0;

/// Highest zoom level accepted from configuration.
pub const MAX_MARKER_ZOOM: f32 = 21.0;

/// Highest coordinate precision accepted from configuration.
pub const MAX_COORDINATE_PRECISION: usize = 8;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Config text is not valid INI
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] ini::ParseError),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Decimal places for latitude and longitude text.
    pub coordinate_precision: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            coordinate_precision: DEFAULT_COORDINATE_PRECISION,
        }
    }
}

/// `[map]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub marker_zoom: f32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            marker_zoom: DEFAULT_MARKER_ZOOM,
        }
    }
}

/// `[labels]` section: unit words for arrival text.
///
/// Singular forms are used for a quantity of exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSettings {
    pub hour: String,
    pub hours: String,
    pub minute: String,
    pub minutes: String,
    pub arrival_error: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            hour: "hour".to_string(),
            hours: "hours".to_string(),
            minute: "minute".to_string(),
            minutes: "minutes".to_string(),
            arrival_error: DEFAULT_ARRIVAL_ERROR.to_string(),
        }
    }
}

impl UnitLabels for LabelSettings {
    fn hours(&self, quantity: i64) -> &str {
        if quantity == 1 {
            &self.hour
        } else {
            &self.hours
        }
    }

    fn minutes(&self, quantity: i64) -> &str {
        if quantity == 1 {
            &self.minute
        } else {
            &self.minutes
        }
    }

    fn arrival_error(&self) -> &str {
        &self.arrival_error
    }
}

/// Complete detail screen configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailConfig {
    pub display: DisplaySettings,
    pub map: MapSettings,
    pub labels: LabelSettings,
}

impl DetailConfig {
    /// Load configuration from the default path (~/.locdetail/config.ini).
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Parse configuration from INI text.
    pub fn from_ini_str(content: &str) -> Result<Self, ConfigFileError> {
        let ini = Ini::load_from_str(content)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        self.to_ini()
            .write_to_file(path)
            .map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Render configuration as INI text.
    pub fn to_config_string(&self) -> Result<String, ConfigFileError> {
        let mut buf = Vec::new();
        self.to_ini()
            .write_to(&mut buf)
            .map_err(|e| ConfigFileError::WriteError(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        ini.with_section(Some("display")).set(
            "coordinate_precision",
            self.display.coordinate_precision.to_string(),
        );
        ini.with_section(Some("map"))
            .set("marker_zoom", self.map.marker_zoom.to_string());
        ini.with_section(Some("labels"))
            .set("hour", self.labels.hour.as_str())
            .set("hours", self.labels.hours.as_str())
            .set("minute", self.labels.minute.as_str())
            .set("minutes", self.labels.minutes.as_str())
            .set("arrival_error", self.labels.arrival_error.as_str());
        ini
    }
}

/// Get the path to the config directory (~/.locdetail).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".locdetail")
}

/// Get the path to the config file (~/.locdetail/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetailConfig::default();
        assert_eq!(config.display.coordinate_precision, 2);
        assert_eq!(config.map.marker_zoom, DEFAULT_MARKER_ZOOM);
        assert_eq!(config.labels.arrival_error, DEFAULT_ARRIVAL_ERROR);
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = DetailConfig::load_from(&config_path).unwrap();
        assert_eq!(config, DetailConfig::default());
    }

    #[test]
    fn test_save_then_load_preserves_settings() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = DetailConfig::default();
        config.display.coordinate_precision = 4;
        config.map.marker_zoom = 15.5;
        config.labels.minutes = "mins".to_string();
        config.save_to(&config_path).unwrap();

        let loaded = DetailConfig::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_label_settings_pluralize_by_quantity() {
        let labels = LabelSettings {
            hour: "Stunde".to_string(),
            hours: "Stunden".to_string(),
            minute: "Minute".to_string(),
            minutes: "Minuten".to_string(),
            arrival_error: "Ankunftszeit unbekannt".to_string(),
        };
        assert_eq!(labels.hours(1), "Stunde");
        assert_eq!(labels.hours(3), "Stunden");
        assert_eq!(labels.minutes(0), "Minuten");
        assert_eq!(
            crate::arrival::format_arrival(5_400_000, &labels),
            "1 Stunde 30 Minuten"
        );
    }

    #[test]
    fn test_config_string_contains_sections() {
        let text = DetailConfig::default().to_config_string().unwrap();
        assert!(text.contains("[display]"));
        assert!(text.contains("[map]"));
        assert!(text.contains("[labels]"));
        assert!(text.contains("marker_zoom=18"));
    }

    #[test]
    fn test_config_string_reads_back() {
        let mut config = DetailConfig::default();
        config.labels.minutes = "Minuten".to_string();
        config.display.coordinate_precision = 5;

        let text = config.to_config_string().unwrap();
        assert_eq!(DetailConfig::from_ini_str(&text).unwrap(), config);
    }
}
