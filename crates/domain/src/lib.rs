// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod evaluator;
mod timezone;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use evaluator::{Transition, is_open_at, next_transition};
pub use timezone::utc_offset_minutes;
pub use types::{
    DailyWindow, DayOfWeek, MINUTES_PER_DAY, Schedule, ScheduleKind, TimeOfDay, WeeklyRule,
};
pub use validation::{
    MIN_WINDOW_MINUTES, ProblemCode, Severity, ValidationProblem, ValidationResult,
    validate_schedule,
};
