// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use spotpark_domain::{DayOfWeek, Schedule, TimeOfDay};

pub fn time(value: &str) -> TimeOfDay {
    TimeOfDay::parse(value).unwrap()
}

/// Open Monday to Friday 09:00 - 17:00, closed weekends.
pub fn business_week() -> Schedule {
    Schedule::weekly(
        DayOfWeek::ALL
            .into_iter()
            .filter(|day| !day.is_weekend())
            .map(|day| (day, Some((time("09:00"), time("17:00"))))),
    )
    .unwrap()
}
