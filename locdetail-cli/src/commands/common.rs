//! Common utilities shared across CLI commands.

use std::path::Path;

use locdetail::config::{config_file_path, DetailConfig};

use crate::error::CliError;

/// Load configuration from `path`, or from the default location.
///
/// Errors carry the path that was actually read.
pub fn load_config(path: Option<&Path>) -> Result<DetailConfig, CliError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_file_path);
    DetailConfig::load_from(&path).map_err(|source| CliError::Config { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_explicit_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.ini"))).unwrap();
        assert_eq!(config, DetailConfig::default());
    }

    #[test]
    fn test_invalid_explicit_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ini");
        fs::write(&path, "[map]\nmarker_zoom = lots\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        match &err {
            CliError::Config { path: reported, .. } => assert_eq!(reported, &path),
            other => panic!("expected config error, got {:?}", other),
        }
        let hint = err.hint().unwrap();
        assert!(hint.contains(&path.display().to_string()));
        assert!(!hint.contains(&config_file_path().display().to_string()));
    }
}
