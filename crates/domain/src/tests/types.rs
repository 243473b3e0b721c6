// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{business_week, saturday_only, time};
use crate::{DailyWindow, DayOfWeek, DomainError, Schedule, ScheduleKind, TimeOfDay, WeeklyRule};

#[test]
fn test_time_of_day_parse_and_display() {
    let parsed: TimeOfDay = TimeOfDay::parse("07:05").unwrap();
    assert_eq!(parsed.minutes(), 425);
    assert_eq!(parsed.hour(), 7);
    assert_eq!(parsed.minute(), 5);
    assert_eq!(parsed.to_string(), "07:05");
}

#[test]
fn test_time_of_day_rejects_malformed_input() {
    for input in ["", "7:05", "07-05", "07:5", "ab:cd", "25:00", "12:60", " 07:05"] {
        let result: Result<TimeOfDay, DomainError> = TimeOfDay::parse(input);
        assert_eq!(
            result,
            Err(DomainError::TimeParseError {
                input: String::from(input)
            }),
            "expected {input:?} to be rejected"
        );
    }
}

#[test]
fn test_time_of_day_from_hm_bounds() {
    assert!(TimeOfDay::from_hm(23, 59).is_ok());
    assert!(TimeOfDay::from_hm(24, 0).is_err());
    assert!(TimeOfDay::from_hm(0, 60).is_err());
    assert!(TimeOfDay::from_minutes(1439).is_ok());
    assert!(TimeOfDay::from_minutes(1440).is_err());
}

#[test]
fn test_day_of_week_parse_is_case_insensitive() {
    assert_eq!(DayOfWeek::parse("monday").unwrap(), DayOfWeek::Monday);
    assert_eq!(DayOfWeek::parse("SATURDAY").unwrap(), DayOfWeek::Saturday);
    assert_eq!(DayOfWeek::parse(" Sunday ").unwrap(), DayOfWeek::Sunday);
    assert_eq!(DayOfWeek::parse("tUeSdAy").unwrap().as_str(), "Tuesday");
}

#[test]
fn test_day_of_week_rejects_abbreviations() {
    assert!(matches!(
        DayOfWeek::parse("Mon"),
        Err(DomainError::InvalidDayOfWeek(_))
    ));
}

#[test]
fn test_day_of_week_all_is_monday_first() {
    assert_eq!(DayOfWeek::ALL[0], DayOfWeek::Monday);
    assert_eq!(DayOfWeek::ALL[6], DayOfWeek::Sunday);
    assert_eq!(
        DayOfWeek::from_chrono(chrono::Weekday::Sun),
        DayOfWeek::Sunday
    );
}

#[test]
fn test_daily_accepts_close_after_open() {
    let schedule: Schedule = Schedule::daily(time("09:00"), time("18:00")).unwrap();
    assert_eq!(schedule.kind(), ScheduleKind::Daily);
    let window: &DailyWindow = schedule.window_on(DayOfWeek::Thursday).unwrap();
    assert_eq!(window.duration_minutes(), 540);
}

#[test]
fn test_daily_rejects_equal_times() {
    let result: Result<Schedule, DomainError> = Schedule::daily(time("09:00"), time("09:00"));
    assert_eq!(
        result,
        Err(DomainError::InvalidWindow {
            open: time("09:00"),
            close: time("09:00"),
        })
    );
}

#[test]
fn test_daily_rejects_overnight_window() {
    let result: Result<Schedule, DomainError> = Schedule::daily(time("22:00"), time("06:00"));
    assert!(matches!(result, Err(DomainError::InvalidWindow { .. })));
}

#[test]
fn test_window_contains_is_half_open() {
    let window: DailyWindow = DailyWindow::new(time("09:00"), time("18:00")).unwrap();
    assert!(!window.contains(time("08:59")));
    assert!(window.contains(time("09:00")));
    assert!(window.contains(time("17:59")));
    assert!(!window.contains(time("18:00")));
}

#[test]
fn test_weekly_last_entry_wins() {
    let schedule: Schedule = Schedule::weekly([
        (DayOfWeek::Monday, Some((time("09:00"), time("17:00")))),
        (DayOfWeek::Monday, Some((time("10:00"), time("12:00")))),
    ])
    .unwrap();

    let window: &DailyWindow = schedule.window_on(DayOfWeek::Monday).unwrap();
    assert_eq!(window.open(), time("10:00"));
    assert_eq!(window.close(), time("12:00"));
}

#[test]
fn test_weekly_later_none_clears_day() {
    let schedule: Schedule = Schedule::weekly([
        (DayOfWeek::Monday, Some((time("09:00"), time("17:00")))),
        (DayOfWeek::Monday, None),
    ])
    .unwrap();

    assert!(schedule.window_on(DayOfWeek::Monday).is_none());
}

#[test]
fn test_weekly_rejects_invalid_entry() {
    let result: Result<Schedule, DomainError> = Schedule::weekly([
        (DayOfWeek::Monday, Some((time("09:00"), time("17:00")))),
        (DayOfWeek::Tuesday, Some((time("17:00"), time("09:00")))),
    ]);
    assert!(matches!(result, Err(DomainError::InvalidWindow { .. })));
}

#[test]
fn test_weekly_empty_is_all_inactive() {
    let schedule: Schedule = Schedule::weekly([]).unwrap();
    match schedule {
        Schedule::Weekly(rule) => assert!(rule.is_all_inactive()),
        other => panic!("expected weekly schedule, got {other:?}"),
    }
}

#[test]
fn test_with_day_leaves_original_untouched() {
    let original: WeeklyRule = WeeklyRule::closed();
    let edited: WeeklyRule =
        original.with_day(DayOfWeek::Friday, Some(DayOfWeek::Friday.default_window()));

    assert!(original.is_all_inactive());
    assert_eq!(edited.active_days().count(), 1);

    let reverted: WeeklyRule = edited.with_day(DayOfWeek::Friday, None);
    assert_eq!(reverted, original);
}

#[test]
fn test_always_has_no_window() {
    let schedule: Schedule = Schedule::always();
    assert_eq!(schedule.kind(), ScheduleKind::Always);
    assert!(schedule.window_on(DayOfWeek::Monday).is_none());
}

#[test]
fn test_schedule_display_labels() {
    assert_eq!(Schedule::always().to_string(), "Always active");
    assert_eq!(
        Schedule::daily(time("09:00"), time("18:00"))
            .unwrap()
            .to_string(),
        "Daily: 09:00 - 18:00"
    );
    assert_eq!(
        saturday_only().to_string(),
        "Weekly: Saturday 10:00 - 16:00"
    );
    assert_eq!(
        Schedule::weekly([]).unwrap().to_string(),
        "Weekly: closed every day"
    );
    assert!(
        business_week()
            .to_string()
            .starts_with("Weekly: Monday 09:00 - 17:00, Tuesday 09:00 - 17:00")
    );
}
