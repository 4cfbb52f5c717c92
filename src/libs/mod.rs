//! Core library modules for the weekhours application.
//!
//! ## Features
//!
//! - **Time Entry**: Progressive normalization of typed clock times
//! - **Interval Calculation**: Overnight shifts and the `24:00` end-of-day value
//! - **Week Aggregation**: Per-day validation, "so far" durations, weekly total
//! - **Core Infrastructure**: Configuration, data storage, messaging, logging
//! - **User Interface**: Console table rendering
//!
//! ## Usage
//!
//! ```rust
//! use weekhours::libs::clock::FixedClock;
//! use weekhours::libs::week::{evaluate, reduce, Day, Intent, WeekState};
//!
//! let clock = FixedClock::at(18, 0).unwrap();
//! let state = reduce(WeekState::default(), Intent::SetIn(Day::Monday, "900".into()), &clock);
//! let state = reduce(state, Intent::SetOut(Day::Monday, "1730".into()), &clock);
//! assert_eq!(evaluate(&state, &clock).day(Day::Monday).to_string(), "8h 30m");
//! ```

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod interval;
pub mod logging;
pub mod messages;
pub mod normalizer;
pub mod time_of_day;
pub mod view;
pub mod week;
