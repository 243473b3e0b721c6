// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Second-pass schedule inspection run before a schedule is persisted.
//!
//! Validation never fails and never mutates. It reports problems, each with
//! a severity: fatal problems block saving, warnings are shown as hints.

use crate::types::{DailyWindow, DayOfWeek, Schedule};
use serde::{Deserialize, Serialize};

/// Windows shorter than this many minutes are reported as suspicious.
pub const MIN_WINDOW_MINUTES: u16 = 15;

/// How serious a validation problem is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational; saving is still allowed.
    Warning,
    /// Blocks saving.
    Fatal,
}

/// Identifies the rule a schedule violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemCode {
    /// A window does not close after it opens.
    InvalidWindow,
    /// A weekly schedule has no active day.
    AllDaysInactive,
    /// A window is shorter than `MIN_WINDOW_MINUTES`.
    SuspiciouslyShortWindow,
}

impl ProblemCode {
    /// Returns the severity this code is always reported with.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::InvalidWindow => Severity::Fatal,
            Self::AllDaysInactive | Self::SuspiciouslyShortWindow => Severity::Warning,
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationProblem {
    /// The rule that was violated.
    pub code: ProblemCode,
    /// How serious the problem is.
    pub severity: Severity,
    /// The weekly day the problem was found on, if any.
    pub day: Option<DayOfWeek>,
}

impl ValidationProblem {
    const fn new(code: ProblemCode, day: Option<DayOfWeek>) -> Self {
        Self {
            code,
            severity: code.severity(),
            day,
        }
    }
}

impl std::fmt::Display for ValidationProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity: &str = match self.severity {
            Severity::Warning => "warning",
            Severity::Fatal => "fatal",
        };
        let message: &str = match self.code {
            ProblemCode::InvalidWindow => "close time is not after open time",
            ProblemCode::AllDaysInactive => "no day is active; the spot is always closed",
            ProblemCode::SuspiciouslyShortWindow => "window is shorter than 15 minutes",
        };
        match self.day {
            Some(day) => write!(f, "{severity}: {day}: {message}"),
            None => write!(f, "{severity}: {message}"),
        }
    }
}

/// The outcome of validating a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// No problems found.
    Ok,
    /// One or more problems found.
    Problems(Vec<ValidationProblem>),
}

impl ValidationResult {
    fn from_problems(problems: Vec<ValidationProblem>) -> Self {
        if problems.is_empty() {
            Self::Ok
        } else {
            Self::Problems(problems)
        }
    }

    /// Returns whether no problems were found.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns whether any problem blocks saving.
    #[must_use]
    pub fn has_fatal(&self) -> bool {
        self.problems()
            .iter()
            .any(|problem| problem.severity == Severity::Fatal)
    }

    /// Returns the problems found, empty when the result is `Ok`.
    #[must_use]
    pub fn problems(&self) -> &[ValidationProblem] {
        match self {
            Self::Ok => &[],
            Self::Problems(problems) => problems,
        }
    }
}

/// Validates a schedule regardless of how it was built.
///
/// # Arguments
///
/// * `schedule` - The schedule to inspect
///
/// # Returns
///
/// `ValidationResult::Ok`, or every problem found. Weekly problems are
/// reported per day in Monday to Sunday order.
#[must_use]
pub fn validate_schedule(schedule: &Schedule) -> ValidationResult {
    let mut problems: Vec<ValidationProblem> = Vec::new();

    match schedule {
        Schedule::Always => {}
        Schedule::Daily(window) => check_window(window, None, &mut problems),
        Schedule::Weekly(rule) => {
            // Rule: a weekly schedule should open at least one day
            if rule.is_all_inactive() {
                problems.push(ValidationProblem::new(ProblemCode::AllDaysInactive, None));
            }
            for (day, window) in rule.active_days() {
                check_window(window, Some(day), &mut problems);
            }
        }
    }

    ValidationResult::from_problems(problems)
}

fn check_window(
    window: &DailyWindow,
    day: Option<DayOfWeek>,
    problems: &mut Vec<ValidationProblem>,
) {
    // Rule: close must be after open (deserialized values skip the constructor)
    if !window.is_well_formed() {
        problems.push(ValidationProblem::new(ProblemCode::InvalidWindow, day));
        return;
    }

    if window.duration_minutes() < MIN_WINDOW_MINUTES {
        problems.push(ValidationProblem::new(
            ProblemCode::SuspiciouslyShortWindow,
            day,
        ));
    }
}
