//! `locdetail show` - open the detail screen for a location record.
//!
//! The screen runs on a single-threaded event loop. The simulated map widget
//! becomes ready on its own thread and is marshalled back onto the loop,
//! the same path a real widget's completion callback takes.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use locdetail::detail::LocationRecord;
use locdetail::screen::LocationDetailScreen;
use tokio::sync::Notify;
use tracing::{info, warn};

use super::common::load_config;
use crate::console::{ConsoleMap, ConsoleRenderer, SimulatedMapWidget};
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Location record (JSON with name, address, latitude, longitude, arrival_time)
    pub record: PathBuf,

    /// Delay before the simulated map becomes ready
    #[arg(long, default_value = "300")]
    pub ready_after_ms: u64,

    /// Simulate a map that never becomes ready
    #[arg(long, conflicts_with = "ready_after_ms")]
    pub never_ready: bool,

    /// How long to wait for the map before closing the screen
    #[arg(long, default_value = "5000")]
    pub timeout_ms: u64,

    /// Configuration file (defaults to ~/.locdetail/config.ini)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: ShowArgs) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;
    let record = LocationRecord::from_json_file(&args.record)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    let placed = Arc::new(Notify::new());
    let ready_after = (!args.never_ready).then(|| Duration::from_millis(args.ready_after_ms));
    let widget = SimulatedMapWidget::new(ConsoleMap::new(Arc::clone(&placed)), ready_after);

    let mut screen = LocationDetailScreen::new(record, widget, &config);
    let forwarder = screen.start(&mut ConsoleRenderer);
    screen.resume();

    let timeout = Duration::from_millis(args.timeout_ms);
    let marker_placed = runtime.block_on(async {
        if let Some(forwarder) = forwarder {
            tokio::spawn(forwarder.run());
        }
        tokio::time::timeout(timeout, placed.notified()).await.is_ok()
    });

    if marker_placed {
        info!(location = %screen.record().name, "Map ready, marker placed");
    } else {
        warn!(
            timeout_ms = args.timeout_ms,
            "Map did not become ready; closing without a marker"
        );
        println!("  Map:       not ready");
    }

    screen.pause();
    screen.teardown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"name":"Depot","address":"4 Mill Lane","latitude":51.5,"longitude":-0.12,"arrival_time":5400000}"#,
        )
        .unwrap();
        file
    }

    fn args(record: PathBuf, never_ready: bool) -> ShowArgs {
        let dir = std::env::temp_dir();
        ShowArgs {
            record,
            ready_after_ms: 0,
            never_ready,
            timeout_ms: 2000,
            config: Some(dir.join("locdetail-test-missing-config.ini")),
        }
    }

    #[test]
    fn test_show_places_marker() {
        let file = record_file();
        assert!(run(args(file.path().to_path_buf(), false)).is_ok());
    }

    #[test]
    fn test_show_without_ready_map_still_succeeds() {
        let file = record_file();
        let mut args = args(file.path().to_path_buf(), true);
        args.timeout_ms = 20;
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_show_missing_record_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = run(args(dir.path().join("missing.json"), false));
        assert!(matches!(result, Err(CliError::Record(_))));
    }
}
