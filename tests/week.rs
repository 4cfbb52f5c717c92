#[cfg(test)]
mod tests {
    use chrono::Duration;
    use weekhours::libs::clock::{Clock, FixedClock};
    use weekhours::libs::week::{evaluate, reduce, Day, DayStatus, Intent, WeekState, ERROR_INDICATOR};

    fn clock() -> FixedClock {
        FixedClock::at(18, 0).unwrap()
    }

    fn apply(state: WeekState, intents: Vec<Intent>, clock: &dyn Clock) -> WeekState {
        intents.into_iter().fold(state, |state, intent| reduce(state, intent, clock))
    }

    fn shift(day: Day, in_raw: &str, out_raw: &str) -> Vec<Intent> {
        vec![Intent::SetIn(day, in_raw.to_string()), Intent::SetOut(day, out_raw.to_string())]
    }

    fn full_week(clock: &dyn Clock) -> WeekState {
        let intents = [
            shift(Day::Monday, "0900", "1730"),
            shift(Day::Tuesday, "2200", "0600"),
            shift(Day::Wednesday, "900", "2400"),
            shift(Day::Thursday, "0800", "0800"),
            shift(Day::Friday, "0845", "1615"),
        ]
        .concat();
        apply(WeekState::default(), intents, clock)
    }

    #[test]
    fn test_per_day_durations() {
        let clock = clock();
        let summary = evaluate(&full_week(&clock), &clock);

        assert_eq!(summary.day(Day::Monday).status, DayStatus::Complete(Duration::minutes(510)));
        assert_eq!(summary.day(Day::Tuesday).status, DayStatus::Complete(Duration::hours(8)));
        assert_eq!(summary.day(Day::Wednesday).status, DayStatus::Complete(Duration::hours(15)));
        assert_eq!(summary.day(Day::Thursday).status, DayStatus::Complete(Duration::zero()));
        assert_eq!(summary.day(Day::Friday).status, DayStatus::Complete(Duration::minutes(450)));
        assert_eq!(summary.day(Day::Saturday).status, DayStatus::Pending);
    }

    #[test]
    fn test_total_is_sum_of_days() {
        let clock = clock();
        let summary = evaluate(&full_week(&clock), &clock);

        let sum = summary.days.iter().fold(Duration::zero(), |acc, day| acc + day.duration());
        assert_eq!(summary.total, sum);
        assert_eq!(summary.total, Duration::minutes(510 + 480 + 900 + 450));
    }

    #[test]
    fn test_clearing_a_day_removes_only_its_contribution() {
        let clock = clock();
        let state = full_week(&clock);
        let before = evaluate(&state, &clock);

        let after = evaluate(&reduce(state, Intent::ClearDay(Day::Tuesday), &clock), &clock);

        assert_eq!(after.total, before.total - before.day(Day::Tuesday).duration());
        for day in Day::ALL.into_iter().filter(|day| *day != Day::Tuesday) {
            assert_eq!(after.day(day), before.day(day));
        }
    }

    #[test]
    fn test_reset_all() {
        let clock = clock();
        let state = reduce(full_week(&clock), Intent::ResetAll, &clock);
        let summary = evaluate(&state, &clock);

        assert!(state.is_empty());
        assert_eq!(summary.total, Duration::zero());
        assert_eq!(summary.format(Day::Monday, "so far").total, "0h 0m");
        assert!(summary.days.iter().all(|day| day.in_text.is_empty() && day.out_text.is_empty()));
    }

    #[test]
    fn test_so_far_uses_injected_clock() {
        let state = apply(WeekState::default(), vec![Intent::SetIn(Day::Saturday, "1000".into())], &clock());

        let at_noon = evaluate(&state, &FixedClock::at(12, 30).unwrap());
        assert_eq!(at_noon.day(Day::Saturday).status, DayStatus::SoFar(Duration::minutes(150)));
        assert_eq!(at_noon.day(Day::Saturday).to_string(), "2h 30m (so far)");

        let later = evaluate(&state, &FixedClock::at(15, 0).unwrap());
        assert_eq!(later.total, Duration::hours(5));

        let before_start = evaluate(&state, &FixedClock::at(9, 0).unwrap());
        assert_eq!(before_start.total, Duration::hours(23));
    }

    #[test]
    fn test_end_now_freezes_so_far_duration() {
        let at_four = FixedClock::at(16, 0).unwrap();
        let state = apply(WeekState::default(), vec![Intent::SetIn(Day::Sunday, "1200".into()), Intent::EndNow(Day::Sunday)], &at_four);

        let summary = evaluate(&state, &FixedClock::at(23, 0).unwrap());
        assert_eq!(state.day(Day::Sunday).out_text, "16:00");
        assert_eq!(summary.day(Day::Sunday).status, DayStatus::Complete(Duration::hours(4)));
        assert!(!summary.day(Day::Sunday).can_end_now());
    }

    #[test]
    fn test_error_days_show_indicator_and_count_zero() {
        let clock = clock();
        let state = apply(
            WeekState::default(),
            [shift(Day::Monday, "2530", "1700"), shift(Day::Tuesday, "2400", "0900"), shift(Day::Wednesday, "0900", "1299")].concat(),
            &clock,
        );
        let summary = evaluate(&state, &clock);

        for day in [Day::Monday, Day::Tuesday, Day::Wednesday] {
            assert!(summary.day(day).is_error());
            assert_eq!(summary.day(day).to_string(), ERROR_INDICATOR);
        }
        assert_eq!(summary.total, Duration::zero());
    }

    #[test]
    fn test_partially_typed_fields_are_not_errors() {
        let clock = clock();
        let state = apply(WeekState::default(), shift(Day::Monday, "123", "17"), &clock);
        let summary = evaluate(&state, &clock);

        assert_eq!(state.day(Day::Monday).in_text, "12:3");
        assert_eq!(state.day(Day::Monday).out_text, "17");
        assert_eq!(summary.day(Day::Monday).status, DayStatus::Pending);
        assert!(!summary.has_errors());
    }

    #[test]
    fn test_format_respects_week_start() {
        let clock = clock();
        let summary = evaluate(&full_week(&clock), &clock);
        let formatted = summary.format(Day::Sunday, "running");

        let names: Vec<&str> = formatted.days.iter().map(|day| day.day.as_str()).collect();
        assert_eq!(names, ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]);
        assert_eq!(formatted.days[1].duration, "8h 30m");
        assert_eq!(formatted.total, "39h 0m");
    }

    #[test]
    fn test_error_and_running_days_are_flagged_in_json() {
        let clock = clock();
        let state = apply(
            WeekState::default(),
            vec![Intent::SetIn(Day::Monday, "2530".to_string()), Intent::SetIn(Day::Tuesday, "0900".to_string())],
            &clock,
        );
        let summary = evaluate(&state, &clock);
        assert_eq!(summary.error_count(), 1);

        let formatted = summary.format(Day::Monday, ERROR_INDICATOR);
        let json: serde_json::Value = serde_json::to_value(&formatted).unwrap();
        let monday = &json["days"][0];
        let tuesday = &json["days"][1];

        assert_eq!(monday["duration"], ERROR_INDICATOR);
        assert_eq!(monday["error"], true);
        assert_eq!(monday["so_far"], false);
        assert_eq!(tuesday["error"], false);
        assert_eq!(tuesday["so_far"], true);
        assert_eq!(tuesday["duration"], format!("9h 0m ({})", ERROR_INDICATOR));
        assert_eq!(json["days"][2]["error"], false);
        assert_eq!(json["days"][2]["so_far"], false);
    }
}
