//! CLI command implementations.
//!
//! - [`arrival`] - Classify and format a single duration
//! - [`show`] - Run the detail screen for a location record

pub mod arrival;
pub mod common;
pub mod show;
