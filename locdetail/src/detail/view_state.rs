//! Display-ready text for the detail screen.

use crate::arrival::{classify, ArrivalBreakdown, UnitLabels};

use super::record::LocationRecord;

/// Decimal places shown for latitude and longitude.
pub const DEFAULT_COORDINATE_PRECISION: usize = 2;

/// Text fields rendered by the detail screen.
///
/// Derived once from a [`LocationRecord`]; derive again if the record
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewState {
    pub title: String,
    pub address: String,
    pub latitude_text: String,
    pub longitude_text: String,
    pub arrival_text: String,
    /// Classification behind `arrival_text`.
    pub arrival: ArrivalBreakdown,
}

impl DetailViewState {
    /// Derive display fields with the given unit words and coordinate
    /// precision.
    pub fn derive(record: &LocationRecord, labels: &dyn UnitLabels, precision: usize) -> Self {
        let arrival = classify(record.arrival_millis);
        Self {
            title: record.name.clone(),
            address: record.address.clone(),
            latitude_text: format!("{:.*}", precision, record.latitude),
            longitude_text: format!("{:.*}", precision, record.longitude),
            arrival_text: arrival.format(labels),
            arrival,
        }
    }
}
