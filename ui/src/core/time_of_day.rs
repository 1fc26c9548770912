//! Duration-to-clock conversion for chart values.
//!
//! Reports transport times of day as plain second counts (seconds since
//! midnight) so that no timezone ever gets involved. Charts want a clock value
//! instead, so each count is laid onto one fixed, arbitrary calendar day. Only
//! the time-of-day portion carries meaning; the date is shared by every value
//! so that values compare and format against each other correctly.

use std::fmt;

use time::{
    macros::{datetime, format_description},
    Date, Duration, PrimitiveDateTime, Time,
};

/// Day every converted value is anchored to.
pub const ANCHOR: PrimitiveDateTime = datetime!(1901-02-01 0:00);

/// A clock reading anchored to [`ANCHOR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(PrimitiveDateTime);

/// Convert seconds since day start into a [`TimeOfDay`].
///
/// Fractions are kept down to the millisecond (truncated). Counts of a day or
/// more roll the date forward instead of failing. Non-finite input maps to the
/// anchor itself.
pub fn to_time_of_day(seconds: f64) -> TimeOfDay {
    let millis = if seconds.is_finite() {
        (seconds * 1000.0).trunc() as i64
    } else {
        0
    };
    TimeOfDay(ANCHOR.saturating_add(Duration::milliseconds(millis)))
}

impl TimeOfDay {
    pub fn date(&self) -> Date {
        self.0.date()
    }

    pub fn time(&self) -> Time {
        self.0.time()
    }

    /// `(hour, minute, second, millisecond)`
    pub fn hms_milli(&self) -> (u8, u8, u8, u16) {
        self.0.time().as_hms_milli()
    }

    /// Inverse of [`to_time_of_day`] (millisecond precision).
    pub fn to_seconds(&self) -> f64 {
        (self.0 - ANCHOR).as_seconds_f64()
    }

    /// Seconds since midnight of whatever day the value landed on.
    pub fn seconds_of_day(&self) -> f64 {
        let (h, m, s, ms) = self.hms_milli();
        h as f64 * 3600.0 + m as f64 * 60.0 + s as f64 + ms as f64 / 1000.0
    }

    /// `HH:mm:ss`
    pub fn format_hms(&self) -> String {
        self.0
            .format(&format_description!("[hour]:[minute]:[second]"))
            .unwrap_or_else(|_| "—".to_string())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_hms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_midnight_of_the_anchor() {
        let value = to_time_of_day(0.0);
        assert_eq!(value.date(), ANCHOR.date());
        assert_eq!(value.hms_milli(), (0, 0, 0, 0));
    }

    #[test]
    fn date_is_constant_within_a_day() {
        for seconds in [0.0, 1.0, 3661.0, 43_200.5, 86_399.999] {
            assert_eq!(to_time_of_day(seconds).date(), ANCHOR.date());
        }
    }

    #[test]
    fn converts_hours_minutes_seconds() {
        assert_eq!(to_time_of_day(3661.0).hms_milli(), (1, 1, 1, 0));
        assert_eq!(to_time_of_day(3661.0).format_hms(), "01:01:01");
        assert_eq!(to_time_of_day(30_600.0).format_hms(), "08:30:00");
    }

    #[test]
    fn fractional_seconds_truncate_to_millis() {
        let value = to_time_of_day(32_400.123_9);
        assert_eq!(value.hms_milli(), (9, 0, 0, 123));
    }

    #[test]
    fn overflow_rolls_into_the_next_day() {
        let value = to_time_of_day(86_400.0 + 60.0);
        assert_eq!(value.date(), ANCHOR.date().next_day().unwrap());
        assert_eq!(value.hms_milli(), (0, 1, 0, 0));
        assert_eq!(value.seconds_of_day(), 60.0);
    }

    #[test]
    fn non_finite_maps_to_anchor() {
        assert_eq!(to_time_of_day(f64::NAN), to_time_of_day(0.0));
        assert_eq!(to_time_of_day(f64::INFINITY), to_time_of_day(0.0));
    }

    #[test]
    fn seconds_round_trip() {
        let value = to_time_of_day(27_123.5);
        assert_eq!(value.to_seconds(), 27_123.5);
        assert_eq!(value.seconds_of_day(), 27_123.5);
    }

    #[test]
    fn later_values_sort_later() {
        assert!(to_time_of_day(3600.0) < to_time_of_day(7200.0));
    }
}
