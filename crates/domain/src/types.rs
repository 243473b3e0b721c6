// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonical availability schedule values.
//!
//! ## Invariants
//!
//! - A `TimeOfDay` is always within 00:00..=23:59
//! - A `DailyWindow` built through `DailyWindow::new` closes strictly after it opens
//! - Windows never span midnight
//! - Schedules are immutable; edits produce new values

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day with minute precision.
///
/// Stored as minutes since midnight. Serialized as an `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub(crate) const fn from_minutes_const(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Creates a time of day from an hour (0-23) and minute (0-59).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimeParseError` if either component is out of range.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour > 23 || minute > 59 {
            return Err(DomainError::TimeParseError {
                input: format!("{hour}:{minute:02}"),
            });
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Creates a time of day from minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimeParseError` if `minutes` is 1440 or more.
    pub fn from_minutes(minutes: u16) -> Result<Self, DomainError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(DomainError::TimeParseError {
                input: format!("{minutes} minutes"),
            });
        }
        Ok(Self(minutes))
    }

    /// Parses a strict 24-hour `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimeParseError` for any other format or an
    /// out-of-range hour or minute.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let err = || DomainError::TimeParseError {
            input: input.to_string(),
        };

        let bytes: &[u8] = input.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(err());
        }

        let digit = |b: u8| -> Result<u8, DomainError> {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(err())
            }
        };

        let hour: u8 = digit(bytes[0])? * 10 + digit(bytes[1])?;
        let minute: u8 = digit(bytes[3])? * 10 + digit(bytes[4])?;

        Self::from_hm(hour, minute).map_err(|_| err())
    }

    /// Returns the number of minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Returns the hour component (0-23).
    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute component (0-59).
    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Every day in canonical order, Monday through Sunday.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Parses a full English day name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDayOfWeek` if the name is not recognized.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            _ => Err(DomainError::InvalidDayOfWeek(s.to_string())),
        }
    }

    /// Returns the title-case name of this day.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Converts from a `chrono` weekday.
    #[must_use]
    pub const fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }

    /// Returns whether this day falls on a weekend.
    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// Returns the window an owner starts from when enabling this day.
    ///
    /// Weekdays default to 09:00 - 17:00, weekends to 10:00 - 16:00.
    #[must_use]
    pub const fn default_window(&self) -> DailyWindow {
        if self.is_weekend() {
            DailyWindow {
                open: TimeOfDay::from_minutes_const(10 * 60),
                close: TimeOfDay::from_minutes_const(16 * 60),
            }
        } else {
            DailyWindow {
                open: TimeOfDay::from_minutes_const(9 * 60),
                close: TimeOfDay::from_minutes_const(17 * 60),
            }
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An open/close pair applied to a single day.
///
/// The window covers `[open, close)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyWindow {
    open: TimeOfDay,
    close: TimeOfDay,
}

impl DailyWindow {
    /// Daily window used when a payload omits its open time.
    pub const DEFAULT_DAILY_OPEN: TimeOfDay = TimeOfDay::from_minutes_const(9 * 60);
    /// Daily window used when a payload omits its close time.
    pub const DEFAULT_DAILY_CLOSE: TimeOfDay = TimeOfDay::from_minutes_const(18 * 60);

    /// Creates a new `DailyWindow`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWindow` if `close` is not strictly after `open`.
    pub const fn new(open: TimeOfDay, close: TimeOfDay) -> Result<Self, DomainError> {
        if close.0 <= open.0 {
            return Err(DomainError::InvalidWindow { open, close });
        }
        Ok(Self { open, close })
    }

    /// Returns the opening time.
    #[must_use]
    pub const fn open(&self) -> TimeOfDay {
        self.open
    }

    /// Returns the closing time.
    #[must_use]
    pub const fn close(&self) -> TimeOfDay {
        self.close
    }

    /// Returns whether the window satisfies `close > open`.
    ///
    /// Always true for windows built with `new`; deserialized values may not be.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.close.0 > self.open.0
    }

    /// Returns the window length in minutes (zero if malformed).
    #[must_use]
    pub const fn duration_minutes(&self) -> u16 {
        self.close.0.saturating_sub(self.open.0)
    }

    /// Returns whether `time` falls within `[open, close)`.
    #[must_use]
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.open <= time && time < self.close
    }
}

impl std::fmt::Display for DailyWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.open, self.close)
    }
}

/// Per-day windows for a weekly schedule.
///
/// A day without an entry is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRule {
    days: BTreeMap<DayOfWeek, DailyWindow>,
}

impl WeeklyRule {
    /// Creates a rule with every day closed.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Returns a copy of this rule with `day` set to `window` (`None` closes the day).
    #[must_use]
    pub fn with_day(&self, day: DayOfWeek, window: Option<DailyWindow>) -> Self {
        let mut days: BTreeMap<DayOfWeek, DailyWindow> = self.days.clone();
        match window {
            Some(window) => days.insert(day, window),
            None => days.remove(&day),
        };
        Self { days }
    }

    /// Returns the window for `day`, if the day is active.
    #[must_use]
    pub fn window(&self, day: DayOfWeek) -> Option<&DailyWindow> {
        self.days.get(&day)
    }

    /// Iterates over active days and their windows, Monday first.
    pub fn active_days(&self) -> impl Iterator<Item = (DayOfWeek, &DailyWindow)> {
        self.days.iter().map(|(day, window)| (*day, window))
    }

    /// Returns whether no day is active.
    #[must_use]
    pub fn is_all_inactive(&self) -> bool {
        self.days.is_empty()
    }
}

/// The kind of a schedule, as named on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleKind {
    Always,
    Daily,
    Weekly,
}

impl ScheduleKind {
    /// Returns the wire name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl std::fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// When a parking spot is open.
///
/// A schedule carries no spot identity; callers associate it with a spot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Schedule {
    /// Open at all times.
    Always,
    /// The same window every day.
    Daily(DailyWindow),
    /// Per-day windows; inactive days are closed.
    Weekly(WeeklyRule),
}

impl Schedule {
    /// Creates an always-open schedule.
    #[must_use]
    pub const fn always() -> Self {
        Self::Always
    }

    /// Creates a schedule open every day from `open` until `close`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWindow` if `close` is not after `open`.
    pub fn daily(open: TimeOfDay, close: TimeOfDay) -> Result<Self, DomainError> {
        Ok(Self::Daily(DailyWindow::new(open, close)?))
    }

    /// Creates a weekly schedule from per-day entries.
    ///
    /// An entry of `None` marks the day inactive. When a day appears more than
    /// once the last entry wins.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWindow` if any entry's window is invalid.
    pub fn weekly<I>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (DayOfWeek, Option<(TimeOfDay, TimeOfDay)>)>,
    {
        let mut rule: WeeklyRule = WeeklyRule::closed();
        for (day, hours) in entries {
            let window: Option<DailyWindow> = match hours {
                Some((open, close)) => Some(DailyWindow::new(open, close)?),
                None => None,
            };
            rule = rule.with_day(day, window);
        }
        Ok(Self::Weekly(rule))
    }

    /// Returns the kind tag of this schedule.
    #[must_use]
    pub const fn kind(&self) -> ScheduleKind {
        match self {
            Self::Always => ScheduleKind::Always,
            Self::Daily(_) => ScheduleKind::Daily,
            Self::Weekly(_) => ScheduleKind::Weekly,
        }
    }

    /// Returns the window in effect on `day`, or `None` if the spot is closed
    /// all day. Always-open schedules have no window.
    #[must_use]
    pub fn window_on(&self, day: DayOfWeek) -> Option<&DailyWindow> {
        match self {
            Self::Always => None,
            Self::Daily(window) => Some(window),
            Self::Weekly(rule) => rule.window(day),
        }
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Always => write!(f, "Always active"),
            Self::Daily(window) => write!(f, "Daily: {window}"),
            Self::Weekly(rule) if rule.is_all_inactive() => {
                write!(f, "Weekly: closed every day")
            }
            Self::Weekly(rule) => {
                write!(f, "Weekly: ")?;
                for (i, (day, window)) in rule.active_days().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{day} {window}")?;
                }
                Ok(())
            }
        }
    }
}
