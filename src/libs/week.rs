//! Week state, intent reducer and per-day aggregation.
//!
//! A [`WeekState`] owns seven [`DayRecord`]s, one per weekday. Every change to
//! it goes through [`reduce`], which takes the current state and an
//! [`Intent`] and returns the next state. [`evaluate`] turns a state into a
//! [`WeekSummary`]: one [`DayResult`] per day plus the weekly total.
//!
//! ## Day evaluation
//!
//! Each day is looked at on its own:
//!
//! 1. A fully typed (5 character) in-time that is not a real time, or is
//!    `24:00`, puts the day in error. So does a fully typed out-time that is
//!    not a real time (`24:00` is fine here).
//! 2. Both times fully typed: the interval between them.
//! 3. In-time fully typed, out-time empty: the interval up to the clock's
//!    current time, marked "so far". The clock is read on every evaluation.
//! 4. Anything else is still being typed and counts as zero.
//!
//! Days in error contribute nothing to the total. Partial input is never an
//! error.

use crate::libs::{
    clock::Clock,
    formatter::{format_duration, FormattedDay},
    interval,
    normalizer::normalize,
    time_of_day::{self, TimeOfDay, TimeTextError},
};
use chrono::Duration;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Text shown in place of a duration for a day in error.
pub const ERROR_INDICATOR: &str = "Not a real time";

/// Default annotation for provisional durations.
pub const SO_FAR_LABEL: &str = "so far";

#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// All seven days in display order, starting at `start`.
    pub fn week_from(start: Day) -> impl Iterator<Item = Day> {
        (0..Day::ALL.len()).map(move |offset| Day::ALL[(start.index() + offset) % Day::ALL.len()])
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day '{0}'")]
pub struct DayParseError(pub String);

impl FromStr for Day {
    type Err = DayParseError;

    /// Accepts full names and three-letter abbreviations in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Day::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_lowercase();
                wanted == name || (wanted.len() == 3 && name.starts_with(&wanted))
            })
            .ok_or_else(|| DayParseError(s.to_string()))
    }
}

/// The in/out text pair entered for one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub day: Day,
    pub in_text: String,
    pub out_text: String,
}

impl DayRecord {
    pub fn new(day: Day) -> Self {
        DayRecord {
            day,
            in_text: String::new(),
            out_text: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.in_text.is_empty() && self.out_text.is_empty()
    }

    pub fn clear(&mut self) {
        self.in_text.clear();
        self.out_text.clear();
    }

    /// Checks every fully typed field; partial fields are not errors.
    pub fn validate(&self) -> Result<(), TimeTextError> {
        if time_of_day::is_complete(&self.in_text) {
            TimeOfDay::parse_start(&self.in_text)?;
        }
        if time_of_day::is_complete(&self.out_text) {
            TimeOfDay::parse_end(&self.out_text)?;
        }
        Ok(())
    }

    /// A valid in-time with no out-time yet.
    pub fn is_open(&self) -> bool {
        time_of_day::is_complete(&self.in_text) && self.out_text.is_empty() && self.validate().is_ok()
    }
}

/// The seven day records of one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekState {
    days: [DayRecord; 7],
}

impl Default for WeekState {
    fn default() -> Self {
        WeekState {
            days: Day::ALL.map(DayRecord::new),
        }
    }
}

impl WeekState {
    pub fn day(&self, day: Day) -> &DayRecord {
        &self.days[day.index()]
    }

    fn day_mut(&mut self, day: Day) -> &mut DayRecord {
        &mut self.days[day.index()]
    }

    /// Records in Monday-first order.
    pub fn records(&self) -> impl Iterator<Item = &DayRecord> {
        self.days.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(DayRecord::is_empty)
    }
}

/// A user action on the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Store the normalized form of the raw text as the in-time.
    SetIn(Day, String),
    /// Store the normalized form of the raw text as the out-time.
    SetOut(Day, String),
    /// Set the out-time to the current time; only applies to an open day.
    EndNow(Day),
    ClearDay(Day),
    ResetAll,
}

/// Applies one intent and returns the resulting state.
pub fn reduce(mut state: WeekState, intent: Intent, clock: &dyn Clock) -> WeekState {
    debug!(?intent, "applying intent");

    match intent {
        Intent::SetIn(day, raw) => state.day_mut(day).in_text = normalize(&raw),
        Intent::SetOut(day, raw) => state.day_mut(day).out_text = normalize(&raw),
        Intent::EndNow(day) => {
            let record = state.day_mut(day);
            if record.is_open() {
                record.out_text = time_of_day::to_canonical(clock.now());
            } else {
                debug!(%day, "end now ignored, day has no open shift");
            }
        }
        Intent::ClearDay(day) => state.day_mut(day).clear(),
        Intent::ResetAll => state = WeekState::default(),
    }

    state
}

/// Outcome of evaluating one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayStatus {
    /// Nothing to count yet.
    Pending,
    Complete(Duration),
    /// Provisional duration up to the current time.
    SoFar(Duration),
    /// A fully typed field is not a real time.
    Error(TimeTextError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayResult {
    pub day: Day,
    pub in_text: String,
    pub out_text: String,
    pub status: DayStatus,
}

impl DayResult {
    /// Contribution to the weekly total.
    pub fn duration(&self) -> Duration {
        match self.status {
            DayStatus::Complete(duration) | DayStatus::SoFar(duration) => duration,
            DayStatus::Pending | DayStatus::Error(_) => Duration::zero(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, DayStatus::Error(_))
    }

    pub fn can_end_now(&self) -> bool {
        matches!(self.status, DayStatus::SoFar(_))
    }

    /// Duration text with the given "so far" annotation, or the error indicator.
    pub fn describe(&self, so_far_label: &str) -> String {
        match &self.status {
            DayStatus::Error(_) => ERROR_INDICATOR.to_string(),
            DayStatus::SoFar(duration) => format!("{} ({})", format_duration(duration), so_far_label),
            DayStatus::Complete(duration) => format_duration(duration),
            DayStatus::Pending => format_duration(&Duration::zero()),
        }
    }

    pub fn format(&self, so_far_label: &str) -> FormattedDay {
        FormattedDay {
            day: self.day.to_string(),
            in_time: self.in_text.clone(),
            out_time: self.out_text.clone(),
            duration: self.describe(so_far_label),
            error: self.is_error(),
            so_far: self.can_end_now(),
        }
    }
}

impl fmt::Display for DayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(SO_FAR_LABEL))
    }
}

/// Evaluates a single day record.
pub fn assess(record: &DayRecord, clock: &dyn Clock) -> DayStatus {
    if let Err(error) = record.validate() {
        return DayStatus::Error(error);
    }

    let in_done = time_of_day::is_complete(&record.in_text);
    if in_done && time_of_day::is_complete(&record.out_text) {
        DayStatus::Complete(interval::elapsed(&record.in_text, &record.out_text))
    } else if in_done && record.out_text.is_empty() {
        let now = time_of_day::to_canonical(clock.now());
        DayStatus::SoFar(interval::elapsed(&record.in_text, &now))
    } else {
        DayStatus::Pending
    }
}

/// Per-day results and the weekly total derived from a [`WeekState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSummary {
    /// Results in Monday-first order.
    pub days: Vec<DayResult>,
    pub total: Duration,
}

impl WeekSummary {
    pub fn day(&self, day: Day) -> &DayResult {
        &self.days[day.index()]
    }

    /// Results in display order starting at `start`.
    pub fn ordered_from(&self, start: Day) -> impl Iterator<Item = &DayResult> {
        Day::week_from(start).map(move |day| self.day(day))
    }

    pub fn error_count(&self) -> usize {
        self.days.iter().filter(|result| result.is_error()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn format(&self, start: Day, so_far_label: &str) -> FormattedWeek {
        FormattedWeek {
            days: self.ordered_from(start).map(|result| result.format(so_far_label)).collect(),
            total: format_duration(&self.total),
        }
    }
}

/// Display-ready week, serializable for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedWeek {
    pub days: Vec<FormattedDay>,
    pub total: String,
}

/// Evaluates every day and sums the results into the weekly total.
pub fn evaluate(state: &WeekState, clock: &dyn Clock) -> WeekSummary {
    let days: Vec<DayResult> = state
        .records()
        .map(|record| {
            let status = assess(record, clock);
            debug!(day = %record.day, in_text = %record.in_text, out_text = %record.out_text, ?status, "evaluated day");
            DayResult {
                day: record.day,
                in_text: record.in_text.clone(),
                out_text: record.out_text.clone(),
                status,
            }
        })
        .collect();

    let total = days.iter().fold(Duration::zero(), |acc, result| acc + result.duration());

    WeekSummary { days, total }
}
