// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::time;
use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::TimeParseError {
        input: String::from("9am"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid time '9am': expected HH:MM (24-hour)"
    );

    let err: DomainError = DomainError::InvalidWindow {
        open: time("18:00"),
        close: time("09:00"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid window 18:00 - 09:00: close time must be after open time"
    );

    let err: DomainError = DomainError::InvalidDayOfWeek(String::from("Funday"));
    assert_eq!(format!("{err}"), "Invalid day of week: Funday");

    let err: DomainError = DomainError::InvalidTimezone(String::from("Mars/Base"));
    assert_eq!(format!("{err}"), "Invalid timezone: Mars/Base");

    let err: DomainError = DomainError::NoTransitionFound;
    assert_eq!(
        format!("{err}"),
        "Schedule never changes state; no transition found"
    );
}
