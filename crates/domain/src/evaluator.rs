// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Temporal queries against a canonical schedule.
//!
//! Every query takes the UTC offset of the spot's local time explicitly, in
//! minutes east of UTC. There is no implicit timezone.
//!
//! ## Invariants
//!
//! - A spot is open during `[open, close)` of the window in effect that day
//! - `next_transition` always returns an instant strictly after its input
//! - All functions are pure

use crate::error::DomainError;
use crate::types::{DayOfWeek, Schedule, TimeOfDay};
use chrono::{
    DateTime, Datelike, Days, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike, Utc,
};

/// How many days past the local date `next_transition` looks for a boundary.
///
/// Covers a full weekly cycle from any point in the day.
const SCAN_DAYS: u64 = 8;

/// A moment at which a schedule's open/closed state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// When the state changes.
    pub at: DateTime<Utc>,
    /// The state from `at` onward.
    pub will_be_open: bool,
}

/// Returns whether a spot on `schedule` is open at `instant`.
///
/// # Arguments
///
/// * `schedule` - The canonical schedule
/// * `instant` - The moment to check
/// * `utc_offset_minutes` - Offset of the spot's local time from UTC
#[must_use]
pub fn is_open_at(schedule: &Schedule, instant: DateTime<Utc>, utc_offset_minutes: i32) -> bool {
    is_open_local(
        schedule,
        shift(instant.naive_utc(), i64::from(utc_offset_minutes)),
    )
}

/// Finds the next moment the open/closed state of `schedule` changes.
///
/// Scans boundaries from the local date of `instant` through the following
/// eight days and returns the first one, strictly after `instant`, at which
/// the state differs from the state at `instant`.
///
/// # Errors
///
/// Returns `DomainError::NoTransitionFound` for schedules whose state never
/// changes: `Always`, and weekly rules with no active day. Callers should
/// check the schedule kind before treating this as unexpected.
pub fn next_transition(
    schedule: &Schedule,
    instant: DateTime<Utc>,
    utc_offset_minutes: i32,
) -> Result<Transition, DomainError> {
    if never_changes(schedule) {
        return Err(DomainError::NoTransitionFound);
    }

    let offset: i64 = i64::from(utc_offset_minutes);
    let local: NaiveDateTime = shift(instant.naive_utc(), offset);
    let currently_open: bool = is_open_local(schedule, local);

    for day_offset in 0..=SCAN_DAYS {
        let Some(date) = local.date().checked_add_days(Days::new(day_offset)) else {
            break;
        };
        let Some(window) = schedule.window_on(DayOfWeek::from_chrono(date.weekday())) else {
            continue;
        };

        for boundary in [window.open(), window.close()] {
            let candidate: NaiveDateTime = date.and_time(naive_time(boundary));
            if candidate <= local {
                continue;
            }

            let open_then: bool = is_open_local(schedule, candidate);
            if open_then != currently_open {
                return Ok(Transition {
                    at: Utc.from_utc_datetime(&shift(candidate, -offset)),
                    will_be_open: open_then,
                });
            }
        }
    }

    Err(DomainError::NoTransitionFound)
}

fn never_changes(schedule: &Schedule) -> bool {
    match schedule {
        Schedule::Always => true,
        Schedule::Daily(_) => false,
        Schedule::Weekly(rule) => rule.is_all_inactive(),
    }
}

fn is_open_local(schedule: &Schedule, local: NaiveDateTime) -> bool {
    if matches!(schedule, Schedule::Always) {
        return true;
    }

    let day: DayOfWeek = DayOfWeek::from_chrono(local.weekday());
    schedule
        .window_on(day)
        .is_some_and(|window| window.contains(time_of_day(local)))
}

/// Truncates a local wall-clock time to minute precision.
#[allow(clippy::cast_possible_truncation)]
fn time_of_day(local: NaiveDateTime) -> TimeOfDay {
    // hour < 24 and minute < 60, so the total always fits below 1440
    TimeOfDay::from_minutes_const((local.hour() * 60 + local.minute()) as u16)
}

fn naive_time(time: TimeOfDay) -> NaiveTime {
    NaiveTime::MIN + TimeDelta::minutes(i64::from(time.minutes()))
}

/// Moves a naive timestamp by `minutes`, saturating at the representable range.
fn shift(naive: NaiveDateTime, minutes: i64) -> NaiveDateTime {
    naive
        .checked_add_signed(TimeDelta::minutes(minutes))
        .unwrap_or(if minutes < 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
}
