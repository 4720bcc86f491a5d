//! Configuration file handling for `~/.locdetail/config.ini`.
//!
//! ```ini
//! [display]
//! coordinate_precision = 2
//!
//! [map]
//! marker_zoom = 18
//!
//! [labels]
//! hour = hour
//! hours = hours
//! minute = minute
//! minutes = minutes
//! arrival_error = Arrival time unavailable
//! ```
//!
//! A missing file yields [`DetailConfig::default`]. Unknown keys are ignored.

mod file;
mod parser;

pub use file::{
    config_directory, config_file_path, ConfigFileError, DetailConfig, DisplaySettings,
    LabelSettings, MapSettings, DEFAULT_MARKER_ZOOM, MAX_COORDINATE_PRECISION, MAX_MARKER_ZOOM,
};
