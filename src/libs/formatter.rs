//! Duration formatting for day rows and the weekly total.
//!
//! Durations render as `{H}h {M}m`, using floor division into hours and
//! remaining minutes. Seconds are dropped, and hours are not clamped to a day
//! because a weekly total can run past 24h. A missing duration renders the
//! same as a zero one.
//!
//! ## Examples
//!
//! ```rust
//! use weekhours::libs::formatter::{format_duration, format_optional_duration};
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(15))), "8h 15m");
//! assert_eq!(format_duration(&Duration::hours(41)), "41h 0m");
//! assert_eq!(format_optional_duration(None), "0h 0m");
//! ```

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// One day row with every value pre-formatted for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedDay {
    /// Full weekday name, e.g. "Monday".
    pub day: String,
    /// In-time as entered, possibly partial or empty.
    pub in_time: String,
    /// Out-time as entered, possibly partial or empty.
    pub out_time: String,
    /// Duration text, "so far" annotation, or the error indicator.
    pub duration: String,
    /// A fully typed time is not real; the day adds nothing to the total.
    pub error: bool,
    /// The duration runs up to the current time.
    pub so_far: bool,
}

/// Formats a duration as `{H}h {M}m`.
///
/// Negative durations are shown as zero. They cannot come out of
/// [`crate::libs::interval`] but are clamped here anyway.
pub fn format_duration(duration: &Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Formats an optional duration; `None` renders as `0h 0m`.
pub fn format_optional_duration(duration: Option<&Duration>) -> String {
    duration.map_or_else(|| format_duration(&Duration::zero()), format_duration)
}
