//! Duration bucketing.

use std::fmt;

use super::labels::UnitLabels;

const MILLIS_PER_SECOND: i64 = 1000;
const SECONDS_PER_MINUTE: i64 = 60;
const MINUTES_PER_HOUR: i64 = 60;

/// Coarse bucket used to pick a display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationCategory {
    /// Less than one hour; only whole minutes are shown.
    Minutes,
    /// One hour or more; hours plus the leftover minutes are shown.
    Hours,
    /// The duration is unavailable.
    Error,
}

impl fmt::Display for DurationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationCategory::Minutes => write!(f, "minutes"),
            DurationCategory::Hours => write!(f, "hours"),
            DurationCategory::Error => write!(f, "error"),
        }
    }
}

/// Result of classifying a duration.
///
/// Which numeric fields are meaningful depends on `category`:
/// - `Minutes` - `minutes`
/// - `Hours` - `hours` and `remainder_minutes`
/// - `Error` - none; all fields are zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalBreakdown {
    pub category: DurationCategory,
    pub hours: i64,
    pub remainder_minutes: i64,
    /// Total whole minutes in the duration.
    pub minutes: i64,
}

impl ArrivalBreakdown {
    fn unavailable() -> Self {
        Self {
            category: DurationCategory::Error,
            hours: 0,
            remainder_minutes: 0,
            minutes: 0,
        }
    }

    /// Render the breakdown as display text.
    ///
    /// Unit words come from `labels`, selected by quantity. The `Error`
    /// category always renders `labels.arrival_error()` regardless of the
    /// numeric fields.
    pub fn format(&self, labels: &dyn UnitLabels) -> String {
        match self.category {
            DurationCategory::Minutes => {
                format!("{} {}", self.minutes, labels.minutes(self.minutes))
            }
            DurationCategory::Hours => format!(
                "{} {} {} {}",
                self.hours,
                labels.hours(self.hours),
                self.remainder_minutes,
                labels.minutes(self.remainder_minutes)
            ),
            DurationCategory::Error => labels.arrival_error().to_string(),
        }
    }
}

/// Classify a duration in milliseconds.
///
/// Integer division truncates toward zero at every step, so partial minutes
/// are dropped: 90 seconds is one minute.
pub fn classify(millis: i64) -> ArrivalBreakdown {
    if millis < 0 {
        return ArrivalBreakdown::unavailable();
    }

    let seconds = millis / MILLIS_PER_SECOND;
    let minutes = seconds / SECONDS_PER_MINUTE;
    let hours = minutes / MINUTES_PER_HOUR;

    if hours == 0 {
        ArrivalBreakdown {
            category: DurationCategory::Minutes,
            hours: 0,
            remainder_minutes: 0,
            minutes,
        }
    } else {
        ArrivalBreakdown {
            category: DurationCategory::Hours,
            hours,
            remainder_minutes: minutes - hours * MINUTES_PER_HOUR,
            minutes,
        }
    }
}

/// Classify and format in one step.
pub fn format_arrival(millis: i64, labels: &dyn UnitLabels) -> String {
    classify(millis).format(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrival::{EnglishUnits, DEFAULT_ARRIVAL_ERROR};
    use proptest::prelude::*;

    #[test]
    fn test_ninety_seconds_is_one_minute() {
        let breakdown = classify(90_000);
        assert_eq!(breakdown.category, DurationCategory::Minutes);
        assert_eq!(breakdown.minutes, 1);
        assert_eq!(breakdown.format(&EnglishUnits), "1 minute");
    }

    #[test]
    fn test_ninety_minutes_is_one_hour_thirty() {
        let breakdown = classify(5_400_000);
        assert_eq!(breakdown.category, DurationCategory::Hours);
        assert_eq!(breakdown.hours, 1);
        assert_eq!(breakdown.remainder_minutes, 30);
        assert_eq!(breakdown.format(&EnglishUnits), "1 hour 30 minutes");
    }

    #[test]
    fn test_zero_is_zero_minutes() {
        let breakdown = classify(0);
        assert_eq!(breakdown.category, DurationCategory::Minutes);
        assert_eq!(breakdown.format(&EnglishUnits), "0 minutes");
    }

    #[test]
    fn test_just_under_an_hour_stays_in_minutes() {
        let breakdown = classify(3_599_999);
        assert_eq!(breakdown.category, DurationCategory::Minutes);
        assert_eq!(breakdown.minutes, 59);
    }

    #[test]
    fn test_exact_hours_render_zero_minutes() {
        assert_eq!(format_arrival(7_200_000, &EnglishUnits), "2 hours 0 minutes");
    }

    #[test]
    fn test_negative_is_error() {
        let breakdown = classify(-1);
        assert_eq!(breakdown.category, DurationCategory::Error);
        assert_eq!(breakdown.format(&EnglishUnits), DEFAULT_ARRIVAL_ERROR);
    }

    #[test]
    fn test_error_format_ignores_numeric_fields() {
        let breakdown = ArrivalBreakdown {
            category: DurationCategory::Error,
            hours: 4,
            remainder_minutes: 12,
            minutes: 252,
        };
        assert_eq!(breakdown.format(&EnglishUnits), DEFAULT_ARRIVAL_ERROR);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(DurationCategory::Minutes.to_string(), "minutes");
        assert_eq!(DurationCategory::Hours.to_string(), "hours");
        assert_eq!(DurationCategory::Error.to_string(), "error");
    }

    proptest! {
        #[test]
        fn prop_under_an_hour_counts_whole_minutes(millis in 0i64..3_600_000) {
            let breakdown = classify(millis);
            prop_assert_eq!(breakdown.category, DurationCategory::Minutes);
            prop_assert_eq!(breakdown.minutes, (millis / 1000) / 60);
        }

        #[test]
        fn prop_remainder_is_within_an_hour(millis in 3_600_000i64..i64::MAX) {
            let breakdown = classify(millis);
            prop_assert_eq!(breakdown.category, DurationCategory::Hours);
            prop_assert_eq!(
                breakdown.remainder_minutes,
                breakdown.minutes - breakdown.hours * 60
            );
            prop_assert!((0..60).contains(&breakdown.remainder_minutes));
        }

        #[test]
        fn prop_negative_always_formats_fallback(millis in i64::MIN..0) {
            let breakdown = classify(millis);
            prop_assert_eq!(breakdown.category, DurationCategory::Error);
            prop_assert_eq!(breakdown.format(&EnglishUnits), DEFAULT_ARRIVAL_ERROR);
        }

        #[test]
        fn prop_classify_is_deterministic(millis in any::<i64>()) {
            prop_assert_eq!(classify(millis), classify(millis));
        }
    }
}
