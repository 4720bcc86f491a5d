//! Time-until-arrival classification and display formatting.
//!
//! A duration in milliseconds is bucketed into a [`DurationCategory`] and then
//! rendered with unit words supplied by a [`UnitLabels`] implementation:
//!
//! ```text
//! millis ──► classify() ──► ArrivalBreakdown ──► format(labels) ──► "1 hour 30 minutes"
//! ```
//!
//! Negative durations are the "unavailable" sentinel and classify as
//! [`DurationCategory::Error`]. Classification never fails.
//!
//! # Example
//!
//! ```
//! use locdetail::arrival::{classify, DurationCategory, EnglishUnits};
//!
//! let breakdown = classify(5_400_000);
//! assert_eq!(breakdown.category, DurationCategory::Hours);
//! assert_eq!(breakdown.format(&EnglishUnits), "1 hour 30 minutes");
//! ```

mod classify;
mod labels;

pub use classify::{classify, format_arrival, ArrivalBreakdown, DurationCategory};
pub use labels::{EnglishUnits, UnitLabels, DEFAULT_ARRIVAL_ERROR};
