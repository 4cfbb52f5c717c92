//! # Weekhours - weekly clock-in/clock-out calculator
//!
//! A command-line utility for entering in/out times for the seven days of a
//! week and reporting the worked duration per day and in total.
//!
//! ## Features
//!
//! - **Typing-friendly Entry**: Bare digits such as "930" become "09:30"
//! - **Overnight Shifts**: An out-time earlier than the in-time ends the next day
//! - **End of Day**: "24:00" as an out-time means the following midnight
//! - **Running Days**: A day without an out-time is counted up to now
//! - **Weekly Total**: Sum of every valid day
//!
//! ## Usage
//!
//! ```rust,no_run
//! use weekhours::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
