//! Source of the current time of day for "so far" durations.

use chrono::{Local, NaiveTime, Timelike};

/// Provides the current wall-clock time of day.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Reads the local system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        // Only minute precision is ever shown, keep readings comparable
        let now = Local::now().time();
        now.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(now)
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    pub fn at(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
