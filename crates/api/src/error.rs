// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the wire boundary.

use spotpark_domain::DomainError;
use thiserror::Error;

/// Errors raised while turning an inbound payload into a canonical schedule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A time, day or window inside the payload was rejected by the domain.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The payload matched none of the known schedule shapes.
    #[error("Unrecognized schedule shape: {reason}")]
    UnrecognizedScheduleShape { reason: String },
}

impl NormalizeError {
    pub(crate) fn unrecognized(reason: impl Into<String>) -> Self {
        Self::UnrecognizedScheduleShape {
            reason: reason.into(),
        }
    }
}
