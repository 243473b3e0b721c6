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
    clippy::all
)]

mod error;
mod listing;
mod normalize;
mod wire;

#[cfg(test)]
mod tests;

pub use error::NormalizeError;
pub use listing::normalize_listing;
pub use normalize::normalize;
pub use wire::{AvailabilityPayload, WeeklyScheduleEntry, to_payload};
