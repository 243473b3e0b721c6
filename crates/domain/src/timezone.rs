// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of IANA timezone names to the explicit offsets the evaluator takes.

use crate::error::DomainError;
use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;

/// Returns the offset of `tz_name` from UTC at `instant`, in minutes.
///
/// The offset depends on the instant because of daylight saving time, so it
/// should be resolved for the moment being queried.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if `tz_name` is not a known IANA zone.
///
/// # Example
///
/// ```text
/// Europe/Bucharest at 2026-07-01T12:00:00Z  ->  180
/// Europe/Bucharest at 2026-01-15T12:00:00Z  ->  120
/// ```
pub fn utc_offset_minutes(tz_name: &str, instant: DateTime<Utc>) -> Result<i32, DomainError> {
    let tz: Tz = tz_name
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(tz_name.to_string()))?;

    let seconds: i32 = instant.with_timezone(&tz).offset().fix().local_minus_utc();
    Ok(seconds / 60)
}
