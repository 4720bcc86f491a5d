//! Unit words for arrival text.

/// Fallback text shown when the arrival duration is unavailable.
pub const DEFAULT_ARRIVAL_ERROR: &str = "Arrival time unavailable";

/// Quantity-keyed unit word lookup.
///
/// Implementations select singular or plural forms for the given quantity.
/// The arrival formatter never pluralizes on its own.
pub trait UnitLabels {
    /// Unit word for `quantity` hours.
    fn hours(&self, quantity: i64) -> &str;

    /// Unit word for `quantity` minutes.
    fn minutes(&self, quantity: i64) -> &str;

    /// Fixed text for an unavailable duration.
    fn arrival_error(&self) -> &str;
}

/// English unit words: singular for exactly one, plural otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishUnits;

impl UnitLabels for EnglishUnits {
    fn hours(&self, quantity: i64) -> &str {
        if quantity == 1 {
            "hour"
        } else {
            "hours"
        }
    }

    fn minutes(&self, quantity: i64) -> &str {
        if quantity == 1 {
            "minute"
        } else {
            "minutes"
        }
    }

    fn arrival_error(&self) -> &str {
        DEFAULT_ARRIVAL_ERROR
    }
}
