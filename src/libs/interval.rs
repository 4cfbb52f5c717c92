//! Elapsed time between an in-time and an out-time.
//!
//! Both times are anchored to one reference day. An out-time that reads
//! earlier on the clock than the in-time belongs to the following day, so a
//! 22:00 → 06:00 shift is eight hours. The `24:00` out-time is midnight at
//! the end of the reference day. Equal times give zero, never a full day.
//!
//! [`elapsed`] is total: text that cannot be read as a time yields a zero
//! duration. Reporting bad input is left to [`crate::libs::week`].

use crate::libs::time_of_day::TimeOfDay;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::trace;

/// Calendar day both instants are anchored to.
fn reference_day() -> NaiveDate {
    NaiveDate::default()
}

fn anchor(time: TimeOfDay) -> NaiveDateTime {
    let day = reference_day();
    match time {
        TimeOfDay::Clock(clock) => day.and_time(clock),
        TimeOfDay::EndOfDay => day.and_time(NaiveTime::MIN) + Duration::days(1),
    }
}

/// Computes the duration between two parsed times.
pub fn between(start: TimeOfDay, end: TimeOfDay) -> Duration {
    let start = anchor(start);
    let mut end = anchor(end);

    if end < start {
        end += Duration::days(1);
    }

    end - start
}

/// Computes the duration between two canonical time strings.
///
/// # Examples
///
/// ```rust
/// use weekhours::libs::interval::elapsed;
/// use chrono::Duration;
///
/// assert_eq!(elapsed("09:00", "17:30"), Duration::minutes(510));
/// assert_eq!(elapsed("22:00", "06:00"), Duration::hours(8));
/// assert_eq!(elapsed("09:00", "24:00"), Duration::hours(15));
/// assert_eq!(elapsed("24:00", "09:00"), Duration::zero());
/// ```
pub fn elapsed(in_text: &str, out_text: &str) -> Duration {
    match (TimeOfDay::parse_start(in_text), TimeOfDay::parse_end(out_text)) {
        (Ok(start), Ok(end)) => between(start, end),
        (start, end) => {
            trace!(in_text, out_text, ?start, ?end, "unparsable interval, using zero");
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_interval_is_the_clock_difference() {
        assert_eq!(elapsed("09:00", "17:30"), Duration::hours(8) + Duration::minutes(30));
        assert_eq!(elapsed("00:00", "23:59"), Duration::hours(23) + Duration::minutes(59));
        assert_eq!(elapsed("12:15", "12:16"), Duration::minutes(1));
    }

    #[test]
    fn earlier_out_time_wraps_to_next_day() {
        assert_eq!(elapsed("22:00", "06:00"), Duration::hours(8));
        assert_eq!(elapsed("23:59", "00:00"), Duration::minutes(1));
        assert_eq!(elapsed("08:01", "08:00"), Duration::hours(23) + Duration::minutes(59));
    }

    #[test]
    fn identical_times_are_zero_not_a_full_day() {
        assert_eq!(elapsed("08:00", "08:00"), Duration::zero());
        assert_eq!(elapsed("00:00", "00:00"), Duration::zero());
    }

    #[test]
    fn end_of_day_is_next_midnight() {
        assert_eq!(elapsed("09:00", "24:00"), Duration::hours(15));
        assert_eq!(elapsed("00:00", "24:00"), Duration::hours(24));
        assert_eq!(elapsed("23:30", "24:00"), Duration::minutes(30));
    }

    #[test]
    fn end_of_day_differs_from_midnight_reading() {
        assert_eq!(elapsed("00:00", "00:00"), Duration::zero());
        assert_eq!(elapsed("00:00", "24:00"), Duration::days(1));
    }

    #[test]
    fn unparsable_input_is_zero() {
        assert_eq!(elapsed("24:00", "09:00"), Duration::zero());
        assert_eq!(elapsed("25:30", "17:00"), Duration::zero());
        assert_eq!(elapsed("09:00", "99:99"), Duration::zero());
        assert_eq!(elapsed("", "17:00"), Duration::zero());
        assert_eq!(elapsed("09:00", ""), Duration::zero());
        assert_eq!(elapsed("12:3", "17:00"), Duration::zero());
    }

    #[test]
    fn result_is_never_negative() {
        for (start, end) in [("23:00", "01:00"), ("13:45", "13:44"), ("00:01", "00:00")] {
            assert!(elapsed(start, end) >= Duration::zero());
        }
    }
}
