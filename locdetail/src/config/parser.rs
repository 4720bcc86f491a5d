//! INI parsing logic for converting `Ini` → `DetailConfig`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;

use super::file::{ConfigFileError, DetailConfig, MAX_COORDINATE_PRECISION, MAX_MARKER_ZOOM};

/// Parse an `Ini` object into a `DetailConfig`.
///
/// Starts from `DetailConfig::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<DetailConfig, ConfigFileError> {
    let mut config = DetailConfig::default();

    // [display] section
    if let Some(section) = ini.section(Some("display")) {
        if let Some(v) = section.get("coordinate_precision") {
            let precision: usize = v.trim().parse().map_err(|_| {
                invalid("display", "coordinate_precision", v, "must be a non-negative integer")
            })?;
            if precision > MAX_COORDINATE_PRECISION {
                return Err(invalid(
                    "display",
                    "coordinate_precision",
                    v,
                    &format!("must be at most {}", MAX_COORDINATE_PRECISION),
                ));
            }
            config.display.coordinate_precision = precision;
        }
    }

    // [map] section
    if let Some(section) = ini.section(Some("map")) {
        if let Some(v) = section.get("marker_zoom") {
            let zoom: f32 = v
                .trim()
                .parse()
                .map_err(|_| invalid("map", "marker_zoom", v, "must be a number"))?;
            if !(0.0..=MAX_MARKER_ZOOM).contains(&zoom) {
                return Err(invalid(
                    "map",
                    "marker_zoom",
                    v,
                    &format!("must be between 0 and {}", MAX_MARKER_ZOOM),
                ));
            }
            config.map.marker_zoom = zoom;
        }
    }

    // [labels] section
    if let Some(section) = ini.section(Some("labels")) {
        let labels = &mut config.labels;
        for (key, slot) in [
            ("hour", &mut labels.hour),
            ("hours", &mut labels.hours),
            ("minute", &mut labels.minute),
            ("minutes", &mut labels.minutes),
            ("arrival_error", &mut labels.arrival_error),
        ] {
            if let Some(v) = section.get(key) {
                let v = v.trim();
                if v.is_empty() {
                    return Err(invalid("labels", key, v, "must not be empty"));
                }
                *slot = v.to_string();
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
