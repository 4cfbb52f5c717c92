//! Interactive week editor.
//!
//! Shows the week table, lets the user pick a day and an action, dispatches
//! the matching [`Intent`] to the reducer and redraws. Nothing is saved when
//! the session ends.

use super::week_config;
use crate::{
    libs::{
        clock::{Clock, SystemClock},
        config::WeekConfig,
        messages::Message,
        view::View,
        week::{evaluate, reduce, Day, DayResult, Intent, WeekState, WeekSummary},
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

enum MenuChoice {
    Day(Day),
    ResetAll,
    Quit,
}

#[derive(Clone, Copy)]
enum DayAction {
    SetIn,
    SetOut,
    EndNow,
    Clear,
    Back,
}

pub fn cmd() -> Result<()> {
    let config = week_config();
    let clock = SystemClock;
    let mut state = WeekState::default();

    loop {
        let summary = evaluate(&state, &clock);
        View::week(&summary.format(config.week_start, &config.so_far_label));
        let errors = summary.error_count();
        if errors > 0 {
            msg_warning!(Message::DaysWithErrors(errors));
        }

        let intent = match select_menu(&config, &summary)? {
            MenuChoice::Quit => break,
            MenuChoice::ResetAll => {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmResetAll.to_string())
                    .default(false)
                    .interact()?;
                if !confirmed {
                    msg_info!(Message::OperationCancelled);
                    continue;
                }
                Intent::ResetAll
            }
            MenuChoice::Day(day) => match day_intent(summary.day(day))? {
                Some(intent) => intent,
                None => continue,
            },
        };

        state = apply(state, intent, &clock);
    }

    msg_print!(Message::SessionEnded, true);
    Ok(())
}

/// Runs one intent and reports the user-visible outcome.
fn apply(state: WeekState, intent: Intent, clock: &dyn Clock) -> WeekState {
    let outcome = match &intent {
        Intent::ResetAll => Some(Message::WeekReset),
        Intent::ClearDay(day) => Some(Message::DayCleared(day.to_string())),
        _ => None,
    };
    let ended = match &intent {
        Intent::EndNow(day) => Some(*day),
        _ => None,
    };

    let state = reduce(state, intent, clock);

    if let Some(message) = outcome {
        msg_success!(message);
    }
    if let Some(day) = ended {
        msg_success!(Message::DayEnded(day.to_string(), state.day(day).out_text.clone()));
    }
    state
}

fn select_menu(config: &WeekConfig, summary: &WeekSummary) -> Result<MenuChoice> {
    let days: Vec<Day> = Day::week_from(config.week_start).collect();
    let mut items: Vec<String> = summary
        .ordered_from(config.week_start)
        .map(|result| format!("{:<10} {}", result.day.name(), result.describe(&config.so_far_label)))
        .collect();
    items.push(Message::MenuResetAll.to_string());
    items.push(Message::MenuQuit.to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectDay.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection {
        index if index < days.len() => MenuChoice::Day(days[index]),
        index if index == days.len() => MenuChoice::ResetAll,
        _ => MenuChoice::Quit,
    })
}

/// Asks what to do with one day. `None` means go back to the day list.
fn day_intent(result: &DayResult) -> Result<Option<Intent>> {
    let day = result.day;
    let mut actions = vec![(DayAction::SetIn, Message::ActionSetIn), (DayAction::SetOut, Message::ActionSetOut)];
    if result.can_end_now() {
        actions.push((DayAction::EndNow, Message::ActionEndNow));
    }
    actions.push((DayAction::Clear, Message::ActionClearDay));
    actions.push((DayAction::Back, Message::ActionBack));

    let labels: Vec<String> = actions.iter().map(|(_, label)| label.to_string()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectAction(day.to_string()).to_string())
        .items(&labels)
        .default(0)
        .interact()?;

    let intent = match actions[selection].0 {
        DayAction::SetIn => Some(Intent::SetIn(day, read_time(Message::PromptInTime(day.to_string()), &result.in_text)?)),
        DayAction::SetOut => Some(Intent::SetOut(day, read_time(Message::PromptOutTime(day.to_string()), &result.out_text)?)),
        DayAction::EndNow => Some(Intent::EndNow(day)),
        DayAction::Clear => Some(Intent::ClearDay(day)),
        DayAction::Back => None,
    };

    Ok(intent)
}

/// Reads raw field text; an empty answer clears the field.
fn read_time(prompt: Message, current: &str) -> Result<String> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(raw)
}
