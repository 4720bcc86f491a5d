//! LocDetail - location detail screen core
//!
//! This library holds the logic behind a screen that shows one location's
//! details and marks it on a map:
//!
//! - [`arrival`] turns a time-until-arrival into display text
//! - [`signal`] is a replay-latest event channel
//! - [`coordinator`] runs reactions once an external resource is ready,
//!   whether they were registered before or after readiness
//! - [`detail`] derives the screen's text fields from a location record
//! - [`screen`] brackets it all in a start/teardown lifecycle
//!
//! Rendering and the map widget itself are supplied by the host through the
//! traits in [`screen`].

pub mod arrival;
pub mod config;
pub mod coordinator;
pub mod detail;
pub mod logging;
pub mod screen;
pub mod signal;
