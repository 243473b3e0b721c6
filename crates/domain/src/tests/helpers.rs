// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::{DateTime, TimeZone, Utc};

use crate::{DayOfWeek, Schedule, TimeOfDay};

pub fn time(value: &str) -> TimeOfDay {
    TimeOfDay::parse(value).unwrap()
}

/// March 2, 2026 is a Monday; day 2 through 8 cover Monday through Sunday.
pub fn utc(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, minute, 0).unwrap()
}

pub fn business_week() -> Schedule {
    Schedule::weekly(
        [
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
        ]
        .into_iter()
        .map(|day| (day, Some((time("09:00"), time("17:00"))))),
    )
    .unwrap()
}

pub fn saturday_only() -> Schedule {
    Schedule::weekly([(DayOfWeek::Saturday, Some((time("10:00"), time("16:00"))))]).unwrap()
}
