// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedules embedded in the owner's spot listing (`GET /parking/my-spots`).
//!
//! Each spot record carries an `availabilitySchedules` array whose entries
//! look like `{ availabilityType, openTime, closeTime, dayOfWeek }`. The first
//! entry decides the schedule kind; weekly spots list one entry per active day.

use crate::error::NormalizeError;
use crate::normalize::{field, normalize};
use serde_json::{Map, Value};
use spotpark_domain::Schedule;
use tracing::debug;

/// Hours a daily listing entry without times is open.
const DAILY_DEFAULT_HOURS: (&str, &str) = ("08:00", "20:00");

/// Hours a weekly listing day without times is open, weekends included.
const WEEKLY_DEFAULT_HOURS: (&str, &str) = ("09:00", "17:00");

/// Extracts the canonical schedule from a backend spot record.
///
/// A spot with no `availabilitySchedules` (missing, null or empty) is open at
/// all times.
///
/// # Errors
///
/// Returns an error if the record or its entries have the wrong JSON type, or
/// if the rebuilt payload fails to normalize.
pub fn normalize_listing(spot: &Value) -> Result<Schedule, NormalizeError> {
    let record: &Map<String, Value> = spot
        .as_object()
        .ok_or_else(|| NormalizeError::unrecognized("spot record must be a JSON object"))?;

    let entries: &Vec<Value> = match field(record, "availabilitySchedules") {
        None => return Ok(Schedule::always()),
        Some(value) => value.as_array().ok_or_else(|| {
            NormalizeError::unrecognized("'availabilitySchedules' must be an array")
        })?,
    };

    let Some(first) = entries.first() else {
        debug!("Spot has no availability entries, treating as always open");
        return Ok(Schedule::always());
    };
    let first: &Map<String, Value> = first.as_object().ok_or_else(|| {
        NormalizeError::unrecognized("'availabilitySchedules' entry must be a JSON object")
    })?;

    normalize(&listing_payload(first, entries))
}

/// Rebuilds the availability payload a listing entry set stands for.
///
/// Listing entries with missing times fall back to the listing's own
/// defaults, not the form defaults `normalize` applies.
fn listing_payload(first: &Map<String, Value>, entries: &[Value]) -> Value {
    let mut payload: Map<String, Value> = Map::new();

    let kind: Option<&Value> = field(first, "availabilityType");
    if let Some(kind) = kind {
        payload.insert(String::from("availabilityType"), kind.clone());
    }

    let kind_is = |name: &str| {
        kind.and_then(Value::as_str)
            .is_some_and(|k| k.trim().eq_ignore_ascii_case(name))
    };
    let weekly: bool =
        kind.map_or_else(|| field(first, "dayOfWeek").is_some(), |_| kind_is("weekly"));

    if weekly {
        // Non-object entries pass through for `normalize` to reject
        let entries: Vec<Value> = entries
            .iter()
            .map(|entry| match entry.as_object() {
                Some(object) => {
                    let mut object: Map<String, Value> = object.clone();
                    fill_default_hours(&mut object, WEEKLY_DEFAULT_HOURS);
                    Value::Object(object)
                }
                None => entry.clone(),
            })
            .collect();
        payload.insert(String::from("weeklySchedules"), Value::Array(entries));
    } else {
        let mut entry: Map<String, Value> = first.clone();
        if kind_is("daily") {
            fill_default_hours(&mut entry, DAILY_DEFAULT_HOURS);
        }
        for (from, to) in [("openTime", "dailyOpenTime"), ("closeTime", "dailyCloseTime")] {
            if let Some(value) = field(&entry, from) {
                payload.insert(String::from(to), value.clone());
            }
        }
    }

    Value::Object(payload)
}

/// Sets `openTime`/`closeTime` on a listing entry where they are missing.
fn fill_default_hours(entry: &mut Map<String, Value>, (open, close): (&str, &str)) {
    for (key, default) in [("openTime", open), ("closeTime", close)] {
        if field(entry, key).is_none() {
            entry.insert(String::from(key), Value::String(String::from(default)));
        }
    }
}
