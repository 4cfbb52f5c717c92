//! Display implementation for weekhours application messages.
//!
//! All user-facing text is defined here, in one match over [`Message`].
//! Command code builds a `Message` and hands it to one of the `msg_*!`
//! macros; it never formats user text itself.
//!
//! ```rust
//! use weekhours::libs::messages::Message;
//!
//! assert_eq!(Message::TotalHours("41h 30m".to_string()).to_string(), "Total Hours: 41h 30m");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === WEEK MESSAGES ===
            Message::WeekHeader => "Work hours for the week (HH:MM, 24-hour)".to_string(),
            Message::TotalHours(total) => format!("Total Hours: {}", total),
            Message::DaysWithErrors(count) => format!("{} day(s) contain a time that is not real and were not counted", count),
            Message::WeekReset => "All days have been cleared.".to_string(),
            Message::DayCleared(day) => format!("{} cleared.", day),
            Message::DayEnded(day, time) => format!("{} ended at {}.", day, time),

            // === ENTRY MESSAGES ===
            Message::InvalidEntry(entry) => format!("Entry '{}' must look like DAY=IN or DAY=IN-OUT (e.g. mon=0900-1730)", entry),
            Message::UnknownDay(day) => format!("Unknown day '{}'. Use a weekday name such as 'monday' or 'mon'", day),
            Message::InvalidNowOverride(time) => format!("'{}' is not a valid current time. Use HH:MM", time),
            Message::NormalizedTime(raw, normalized) => format!("'{}' -> '{}'", raw, normalized),

            // === SESSION MESSAGES ===
            Message::PromptSelectDay => "Select a day".to_string(),
            Message::PromptSelectAction(day) => format!("{}: choose an action", day),
            Message::PromptInTime(day) => format!("{} in time (HH:MM)", day),
            Message::PromptOutTime(day) => format!("{} out time (HH:MM)", day),
            Message::ActionSetIn => "Set in time".to_string(),
            Message::ActionSetOut => "Set out time".to_string(),
            Message::ActionEndNow => "End now".to_string(),
            Message::ActionClearDay => "Clear".to_string(),
            Message::ActionBack => "Back".to_string(),
            Message::MenuResetAll => "Reset all".to_string(),
            Message::MenuQuit => "Quit".to_string(),
            Message::ConfirmResetAll => "Clear every day of the week?".to_string(),
            Message::SessionEnded => "Session ended. Times are not saved.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted, defaults will be used".to_string(),
            Message::ConfigNotFound => "No configuration file to delete".to_string(),
            Message::ConfigModuleWeek => "Week settings".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read config, using defaults: {}", error),
            Message::PromptWeekStart => "First day of the week".to_string(),
            Message::PromptSoFarLabel => "Label for running durations".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
