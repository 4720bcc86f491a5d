//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use locdetail::config::ConfigFileError;
use locdetail::detail::RecordError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file at `path` could not be loaded
    Config {
        path: PathBuf,
        source: ConfigFileError,
    },
    /// Location record could not be loaded
    Record(RecordError),
    /// Failed to build the event loop
    Runtime(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let Some(hint) = self.hint() {
            eprintln!();
            eprintln!("{}", hint);
        }

        process::exit(1)
    }

    /// Follow-up advice printed under the error, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::Record(RecordError::Parse { .. }) => Some(
                "A location record is a JSON object with the fields:\n  \
                 name, address, latitude, longitude, arrival_time (milliseconds)"
                    .to_string(),
            ),
            CliError::Config { path, .. } => Some(format!(
                "Check {} or pass --config with another file",
                path.display()
            )),
            _ => None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config { source, .. } => write!(f, "{}", source),
            CliError::Record(e) => write!(f, "{}", e),
            CliError::Runtime(msg) => write!(f, "Failed to start event loop: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config { source, .. } => Some(source),
            CliError::Record(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RecordError> for CliError {
    fn from(e: RecordError) -> Self {
        CliError::Record(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_error_display() {
        let err = CliError::Runtime("no reactor".to_string());
        assert_eq!(err.to_string(), "Failed to start event loop: no reactor");
    }

    #[test]
    fn test_record_error_converts() {
        let err: CliError = RecordError::InvalidCoordinate {
            field: "latitude",
            value: 120.0,
        }
        .into();
        assert!(matches!(err, CliError::Record(_)));
        assert_eq!(err.to_string(), "Invalid latitude: 120");
    }

    #[test]
    fn test_config_hint_names_the_loaded_file() {
        let err = CliError::Config {
            path: PathBuf::from("/srv/ferry/detail.ini"),
            source: ConfigFileError::WriteError("disk full".to_string()),
        };
        let hint = err.hint().expect("config errors carry a hint");
        assert!(hint.contains("/srv/ferry/detail.ini"));
        assert_eq!(err.to_string(), "Failed to write config file: disk full");
    }

    #[test]
    fn test_runtime_error_has_no_hint() {
        assert!(CliError::Runtime("no reactor".to_string()).hint().is_none());
    }
}
