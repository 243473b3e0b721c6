// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion of loosely shaped schedule payloads into canonical schedules.
//!
//! Accepted shapes:
//!
//! ```text
//! { scheduleType, dailyHours: { start, end } }
//! { availabilityType, dailyOpenTime, dailyCloseTime }
//! { weeklySchedule: { monday: { active, start, end }, ... } }
//! { weeklySchedules: [ { dayOfWeek, openTime, closeTime, active? }, ... ] }
//! ```
//!
//! A JSON `null` is treated the same as a missing key everywhere.

use crate::error::NormalizeError;
use serde_json::{Map, Value};
use spotpark_domain::{DailyWindow, DayOfWeek, Schedule, TimeOfDay};
use tracing::{debug, warn};

type Object = Map<String, Value>;
type DayEntry = (DayOfWeek, Option<(TimeOfDay, TimeOfDay)>);

/// Keys that may carry an explicit type, in lookup order.
const TYPE_KEYS: [&str; 2] = ["availabilityType", "scheduleType"];

/// The resolved type of an inbound payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Discriminator {
    Always,
    /// Legacy alias: always-open unless daily hours accompany it.
    Normal,
    Daily,
    Weekly,
}

impl Discriminator {
    fn parse(value: &str) -> Result<Self, NormalizeError> {
        match value.trim().to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "normal" => Ok(Self::Normal),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            _ => Err(NormalizeError::unrecognized(format!(
                "unknown schedule type '{value}'"
            ))),
        }
    }
}

/// Normalizes any of the known payload shapes into a canonical schedule.
///
/// # Arguments
///
/// * `input` - The payload, as received from a form or the backend
///
/// # Errors
///
/// Returns an error if:
/// - The input is not a JSON object, or a container has the wrong JSON type
/// - The schedule type is not one of always, normal, daily or weekly
/// - A day name is unknown
/// - A time is not `HH:MM`
/// - A window does not close after it opens
pub fn normalize(input: &Value) -> Result<Schedule, NormalizeError> {
    let result: Result<Schedule, NormalizeError> = normalize_value(input);

    match &result {
        Ok(schedule) => debug!(kind = %schedule.kind(), "Normalized availability schedule"),
        Err(err) => warn!(error = %err, "Failed to normalize availability schedule"),
    }

    result
}

fn normalize_value(input: &Value) -> Result<Schedule, NormalizeError> {
    let object: &Object = input
        .as_object()
        .ok_or_else(|| NormalizeError::unrecognized("schedule payload must be a JSON object"))?;

    match resolve_discriminator(object)? {
        Discriminator::Always => Ok(Schedule::always()),
        Discriminator::Normal if has_daily_container(object) => normalize_daily(object),
        Discriminator::Normal => Ok(Schedule::always()),
        Discriminator::Daily => normalize_daily(object),
        Discriminator::Weekly => normalize_weekly(object),
    }
}

fn resolve_discriminator(object: &Object) -> Result<Discriminator, NormalizeError> {
    for key in TYPE_KEYS {
        if let Some(value) = field(object, key) {
            let name: &str = value.as_str().ok_or_else(|| {
                NormalizeError::unrecognized(format!("'{key}' must be a string"))
            })?;
            return Discriminator::parse(name);
        }
    }

    if has_weekly_container(object) {
        Ok(Discriminator::Weekly)
    } else if has_daily_container(object) {
        Ok(Discriminator::Daily)
    } else {
        Ok(Discriminator::Always)
    }
}

fn has_weekly_container(object: &Object) -> bool {
    field(object, "weeklySchedules").is_some() || field(object, "weeklySchedule").is_some()
}

fn has_daily_container(object: &Object) -> bool {
    ["dailyHours", "dailyOpenTime", "dailyCloseTime"]
        .into_iter()
        .any(|key| field(object, key).is_some())
}

fn normalize_daily(object: &Object) -> Result<Schedule, NormalizeError> {
    let (open, close) = if let Some(hours) = field(object, "dailyHours") {
        let hours: &Object = expect_object(hours, "dailyHours")?;
        (time_field(hours, "start")?, time_field(hours, "end")?)
    } else {
        (
            time_field(object, "dailyOpenTime")?,
            time_field(object, "dailyCloseTime")?,
        )
    };

    Ok(Schedule::daily(
        open.unwrap_or(DailyWindow::DEFAULT_DAILY_OPEN),
        close.unwrap_or(DailyWindow::DEFAULT_DAILY_CLOSE),
    )?)
}

fn normalize_weekly(object: &Object) -> Result<Schedule, NormalizeError> {
    // The array form is what the backend speaks, so it wins over the map form
    let entries: Vec<DayEntry> = if let Some(list) = field(object, "weeklySchedules") {
        weekly_from_list(list)?
    } else if let Some(days) = field(object, "weeklySchedule") {
        weekly_from_map(days)?
    } else {
        Vec::new()
    };

    Ok(Schedule::weekly(entries)?)
}

/// `[{ dayOfWeek, openTime, closeTime, active? }]`: a listed day is active
/// unless it says `active: false`.
fn weekly_from_list(list: &Value) -> Result<Vec<DayEntry>, NormalizeError> {
    let items: &Vec<Value> = list
        .as_array()
        .ok_or_else(|| NormalizeError::unrecognized("'weeklySchedules' must be an array"))?;

    let mut entries: Vec<DayEntry> = Vec::with_capacity(items.len());
    for item in items {
        let item: &Object = expect_object(item, "weeklySchedules entry")?;
        let day_name: &str = field(item, "dayOfWeek")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                NormalizeError::unrecognized("'weeklySchedules' entry needs a 'dayOfWeek' string")
            })?;
        let day: DayOfWeek = parse_day(day_name)?;

        let active: bool = !matches!(field(item, "active"), Some(Value::Bool(false)));
        let hours: Option<(TimeOfDay, TimeOfDay)> = if active {
            Some(day_hours(item, day, "openTime", "closeTime")?)
        } else {
            None
        };
        entries.push((day, hours));
    }

    Ok(entries)
}

/// `{ monday: { active, start, end } }`: a day is active only with `active: true`.
fn weekly_from_map(days: &Value) -> Result<Vec<DayEntry>, NormalizeError> {
    let days: &Object = expect_object(days, "weeklySchedule")?;

    let mut entries: Vec<DayEntry> = Vec::with_capacity(days.len());
    for (name, value) in days {
        let day: DayOfWeek = parse_day(name)?;
        let value: &Object = expect_object(value, "weeklySchedule day")?;

        let active: bool = matches!(field(value, "active"), Some(Value::Bool(true)));
        let hours: Option<(TimeOfDay, TimeOfDay)> = if active {
            Some(day_hours(value, day, "start", "end")?)
        } else {
            None
        };
        entries.push((day, hours));
    }

    Ok(entries)
}

fn parse_day(name: &str) -> Result<DayOfWeek, NormalizeError> {
    DayOfWeek::parse(name)
        .map_err(|_| NormalizeError::unrecognized(format!("unknown day of week '{name}'")))
}

/// Reads a day's open/close pair, filling gaps from the day's template window.
fn day_hours(
    object: &Object,
    day: DayOfWeek,
    open_key: &str,
    close_key: &str,
) -> Result<(TimeOfDay, TimeOfDay), NormalizeError> {
    let template: DailyWindow = day.default_window();
    let open: TimeOfDay = time_field(object, open_key)?.unwrap_or_else(|| template.open());
    let close: TimeOfDay = time_field(object, close_key)?.unwrap_or_else(|| template.close());
    Ok((open, close))
}

fn time_field(object: &Object, key: &str) -> Result<Option<TimeOfDay>, NormalizeError> {
    match field(object, key) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(TimeOfDay::parse(text)?)),
        Some(_) => Err(NormalizeError::unrecognized(format!(
            "'{key}' must be an HH:MM string"
        ))),
    }
}

fn expect_object<'a>(value: &'a Value, what: &str) -> Result<&'a Object, NormalizeError> {
    value
        .as_object()
        .ok_or_else(|| NormalizeError::unrecognized(format!("{what} must be a JSON object")))
}

/// Looks up `key`, treating JSON `null` as absent.
pub(crate) fn field<'a>(object: &'a Object, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}
