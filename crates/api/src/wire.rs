// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The availability payload exchanged with the backend.
//!
//! This is the shape `PUT /parking/{id}/availability` accepts:
//!
//! ```text
//! {
//!   "availabilityType": "always" | "daily" | "weekly",
//!   "dailyOpenTime": "HH:MM",
//!   "dailyCloseTime": "HH:MM",
//!   "weeklySchedules": [{ "dayOfWeek": "Monday", "openTime": "HH:MM", "closeTime": "HH:MM" }]
//! }
//! ```

use crate::error::NormalizeError;
use serde::{Deserialize, Serialize};
use spotpark_domain::{DailyWindow, DayOfWeek, Schedule, ScheduleKind, TimeOfDay};

/// One active day of a weekly payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyScheduleEntry {
    /// The day, title case.
    pub day_of_week: DayOfWeek,
    /// Opening time.
    pub open_time: TimeOfDay,
    /// Closing time.
    pub close_time: TimeOfDay,
}

/// Backend availability payload.
///
/// Fields that do not apply to the schedule kind are omitted on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityPayload {
    /// The schedule kind.
    pub availability_type: ScheduleKind,
    /// Daily opening time (daily schedules only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_open_time: Option<TimeOfDay>,
    /// Daily closing time (daily schedules only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_close_time: Option<TimeOfDay>,
    /// Active days (weekly schedules only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_schedules: Option<Vec<WeeklyScheduleEntry>>,
}

/// Serializes a canonical schedule into the backend payload.
///
/// Weekly schedules list active days only, Monday through Sunday.
#[must_use]
pub fn to_payload(schedule: &Schedule) -> AvailabilityPayload {
    let mut payload: AvailabilityPayload = AvailabilityPayload {
        availability_type: schedule.kind(),
        daily_open_time: None,
        daily_close_time: None,
        weekly_schedules: None,
    };

    match schedule {
        Schedule::Always => {}
        Schedule::Daily(window) => {
            payload.daily_open_time = Some(window.open());
            payload.daily_close_time = Some(window.close());
        }
        Schedule::Weekly(rule) => {
            payload.weekly_schedules = Some(
                rule.active_days()
                    .map(|(day, window)| WeeklyScheduleEntry {
                        day_of_week: day,
                        open_time: window.open(),
                        close_time: window.close(),
                    })
                    .collect(),
            );
        }
    }

    payload
}

impl From<&Schedule> for AvailabilityPayload {
    fn from(schedule: &Schedule) -> Self {
        to_payload(schedule)
    }
}

impl TryFrom<&AvailabilityPayload> for Schedule {
    type Error = NormalizeError;

    /// Builds a schedule from an already typed payload.
    ///
    /// Missing daily times fall back to the same defaults `normalize` uses.
    fn try_from(payload: &AvailabilityPayload) -> Result<Self, Self::Error> {
        let schedule: Self = match payload.availability_type {
            ScheduleKind::Always => Self::always(),
            ScheduleKind::Daily => Self::daily(
                payload
                    .daily_open_time
                    .unwrap_or(DailyWindow::DEFAULT_DAILY_OPEN),
                payload
                    .daily_close_time
                    .unwrap_or(DailyWindow::DEFAULT_DAILY_CLOSE),
            )?,
            ScheduleKind::Weekly => Self::weekly(
                payload
                    .weekly_schedules
                    .iter()
                    .flatten()
                    .map(|entry| (entry.day_of_week, Some((entry.open_time, entry.close_time)))),
            )?,
        };
        Ok(schedule)
    }
}
