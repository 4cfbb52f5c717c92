#[derive(Debug, Clone)]
pub enum Message {
    // === WEEK MESSAGES ===
    WeekHeader,
    TotalHours(String), // formatted total
    DaysWithErrors(usize),
    WeekReset,
    DayCleared(String),       // day
    DayEnded(String, String), // day, out-time

    // === ENTRY MESSAGES ===
    InvalidEntry(String),           // raw entry
    UnknownDay(String),             // raw day
    InvalidNowOverride(String),     // raw time
    NormalizedTime(String, String), // raw, normalized

    // === SESSION MESSAGES ===
    PromptSelectDay,
    PromptSelectAction(String), // day
    PromptInTime(String),       // day
    PromptOutTime(String),      // day
    ActionSetIn,
    ActionSetOut,
    ActionEndNow,
    ActionClearDay,
    ActionBack,
    MenuResetAll,
    MenuQuit,
    ConfirmResetAll,
    SessionEnded,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleWeek,
    ConfigReadFailed(String), // error
    PromptWeekStart,
    PromptSoFarLabel,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
