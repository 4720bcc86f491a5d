//! The location a detail screen is opened for.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valid latitude range in degrees.
const LAT_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees.
const LON_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Errors loading a [`LocationRecord`].
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to read location record {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse location record {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid {field}: {value}")]
    InvalidCoordinate { field: &'static str, value: f64 },
}

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Immutable description of one location.
///
/// `arrival_millis` is the time until arrival in milliseconds, fixed when the
/// screen opens. Negative values mean the arrival time is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "arrival_time")]
    pub arrival_millis: i64,
}

impl LocationRecord {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        position: LatLng,
        arrival_millis: i64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            latitude: position.latitude,
            longitude: position.longitude,
            arrival_millis,
        }
    }

    /// Load and validate a record from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, RecordError> {
        let content = std::fs::read_to_string(path).map_err(|source| RecordError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let record: Self = serde_json::from_str(&content).map_err(|source| RecordError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        record.validate()?;
        Ok(record)
    }

    /// Check that the coordinates are finite and in range.
    pub fn validate(&self) -> Result<(), RecordError> {
        if !self.latitude.is_finite() || !LAT_RANGE.contains(&self.latitude) {
            return Err(RecordError::InvalidCoordinate {
                field: "latitude",
                value: self.latitude,
            });
        }
        if !self.longitude.is_finite() || !LON_RANGE.contains(&self.longitude) {
            return Err(RecordError::InvalidCoordinate {
                field: "longitude",
                value: self.longitude,
            });
        }
        Ok(())
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}
