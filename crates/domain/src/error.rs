// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::TimeOfDay;

/// Errors that can occur while constructing or querying a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time string did not match `HH:MM`, or an hour/minute was out of range.
    TimeParseError {
        /// The rejected input.
        input: String,
    },
    /// The close time of a window is not strictly after its open time.
    InvalidWindow {
        /// The requested open time.
        open: TimeOfDay,
        /// The requested close time.
        close: TimeOfDay,
    },
    /// A day name did not match any day of the week.
    InvalidDayOfWeek(String),
    /// The named timezone is not a known IANA zone.
    InvalidTimezone(String),
    /// The schedule never changes state, so there is no next transition.
    NoTransitionFound,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimeParseError { input } => {
                write!(f, "Invalid time '{input}': expected HH:MM (24-hour)")
            }
            Self::InvalidWindow { open, close } => {
                write!(
                    f,
                    "Invalid window {open} - {close}: close time must be after open time"
                )
            }
            Self::InvalidDayOfWeek(day) => write!(f, "Invalid day of week: {day}"),
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::NoTransitionFound => {
                write!(f, "Schedule never changes state; no transition found")
            }
        }
    }
}

impl std::error::Error for DomainError {}
