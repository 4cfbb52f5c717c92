//! Non-interactive weekly summary.
//!
//! Days are given as `DAY=IN` or `DAY=IN-OUT` entries, for example
//! `weekhours sum mon=0900-1730 tue=2200-0600 wed=845`. Each time goes through
//! the same normalization as typed input, so `845` is read as `08:45`. A day
//! with only an in-time is counted up to the current time, which `--now`
//! can pin for reproducible output. `--start` picks the first row.

use super::week_config;
use crate::{
    libs::{
        clock::{Clock, FixedClock, SystemClock},
        messages::Message,
        normalizer::normalize,
        time_of_day::TimeOfDay,
        view::View,
        week::{evaluate, reduce, Day, Intent, WeekState},
    },
    msg_bail_anyhow, msg_error_anyhow, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Day entries such as "mon=0900-1730", "tue=2200-0600" or "wed=0845"
    #[arg(value_name = "DAY=IN[-OUT]")]
    entries: Vec<String>,

    /// Use this time (HH:MM) instead of the system clock for running days
    #[arg(long, value_name = "HH:MM")]
    now: Option<String>,

    /// First row of the table, overriding the configured week start
    #[arg(long, value_enum, value_name = "DAY")]
    start: Option<Day>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

/// Turns one `DAY=IN[-OUT]` entry into the intents that record it.
pub fn parse_entry(entry: &str) -> Result<Vec<Intent>> {
    let Some((day, times)) = entry.split_once('=') else {
        msg_bail_anyhow!(Message::InvalidEntry(entry.to_string()));
    };
    let day: Day = day.parse().map_err(|_| msg_error_anyhow!(Message::UnknownDay(day.to_string())))?;

    let intents = match times.split_once('-') {
        Some((in_time, out_time)) => vec![
            Intent::SetIn(day, in_time.to_string()),
            Intent::SetOut(day, out_time.to_string()),
        ],
        None => vec![Intent::SetIn(day, times.to_string())],
    };

    Ok(intents)
}

/// Reads a `--now` override as a clock.
pub fn parse_now(raw: &str) -> Result<FixedClock> {
    match TimeOfDay::parse_start(&normalize(raw)) {
        Ok(TimeOfDay::Clock(time)) => Ok(FixedClock(time)),
        _ => Err(msg_error_anyhow!(Message::InvalidNowOverride(raw.to_string()))),
    }
}

/// Applies every entry, in order, to an empty week.
pub fn build_week(entries: &[String], clock: &dyn Clock) -> Result<WeekState> {
    let mut state = WeekState::default();
    for entry in entries {
        for intent in parse_entry(entry)? {
            state = reduce(state, intent, clock);
        }
    }
    Ok(state)
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let config = week_config();
    let clock: Box<dyn Clock> = match &args.now {
        Some(raw) => Box::new(parse_now(raw)?),
        None => Box::new(SystemClock),
    };

    let state = build_week(&args.entries, clock.as_ref())?;
    let summary = evaluate(&state, clock.as_ref());
    let start = args.start.unwrap_or(config.week_start);
    let formatted = summary.format(start, &config.so_far_label);

    if args.json {
        msg_print!(serde_json::to_string_pretty(&formatted)?);
        return Ok(());
    }

    View::week(&formatted);
    let errors = summary.error_count();
    if errors > 0 {
        msg_warning!(Message::DaysWithErrors(errors));
    }
    msg_print!(Message::TotalHours(formatted.total), true);

    Ok(())
}
