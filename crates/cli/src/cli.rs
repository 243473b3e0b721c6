// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line arguments and subcommand execution.

use chrono::{DateTime, Utc};
use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{WrapErr, bail},
};
use serde_json::Value;
use spotpark_api::{normalize, normalize_listing, to_payload};
use spotpark_domain::{
    DomainError, Schedule, ValidationResult, is_open_at, next_transition, utc_offset_minutes,
    validate_schedule,
};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;

/// `SpotPark` availability tool - normalize, validate and query parking spot schedules
#[derive(Debug, Parser)]
#[command(name = "spotpark", author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    /// Returns the log level selected with `-v`/`-q`.
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    /// Executes the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or normalized, or the
    /// timezone is unknown.
    pub fn run(self) -> Result<ExitCode> {
        self.command.run()
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the canonical backend payload for a schedule
    #[command(visible_alias = "n")]
    Normalize {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Report validation problems; exits non-zero on a fatal one
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print whether the spot is open at an instant
    IsOpen {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        clock: ClockArgs,
    },

    /// Print the next moment the spot opens or closes
    Next {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        clock: ClockArgs,
    },
}

impl Command {
    fn run(self) -> Result<ExitCode> {
        match self {
            Self::Normalize { input } => {
                let schedule: Schedule = input.schedule()?;
                info!("{schedule}");
                println!("{}", serde_json::to_string_pretty(&to_payload(&schedule))?);
                Ok(ExitCode::SUCCESS)
            }
            Self::Validate { input } => {
                let schedule: Schedule = input.schedule()?;
                let result: ValidationResult = validate_schedule(&schedule);
                if result.is_ok() {
                    println!("ok");
                }
                for problem in result.problems() {
                    println!("{problem}");
                }
                if result.has_fatal() {
                    Ok(ExitCode::FAILURE)
                } else {
                    Ok(ExitCode::SUCCESS)
                }
            }
            Self::IsOpen { input, clock } => {
                let schedule: Schedule = input.schedule()?;
                let (instant, offset) = clock.resolve()?;
                let open: bool = is_open_at(&schedule, instant, offset);
                println!("{}", if open { "open" } else { "closed" });
                Ok(ExitCode::SUCCESS)
            }
            Self::Next { input, clock } => {
                let schedule: Schedule = input.schedule()?;
                let (instant, offset) = clock.resolve()?;
                match next_transition(&schedule, instant, offset) {
                    Ok(transition) => {
                        let change: &str = if transition.will_be_open {
                            "opens"
                        } else {
                            "closes"
                        };
                        println!("{} {change}", transition.at.to_rfc3339());
                    }
                    Err(DomainError::NoTransitionFound) => println!("no transition"),
                    Err(err) => return Err(err.into()),
                }
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Where the schedule comes from.
#[derive(Debug, Clone, ClapArgs)]
struct InputArgs {
    /// JSON document to read, or `-` for stdin
    input: PathBuf,

    /// Read a backend spot record with an `availabilitySchedules` array
    #[arg(long)]
    listing: bool,
}

impl InputArgs {
    fn read(&self) -> Result<Value> {
        let text: String = if self.input.as_os_str() == "-" {
            let mut buffer: String = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read schedule from stdin")?;
            buffer
        } else {
            std::fs::read_to_string(&self.input)
                .wrap_err_with(|| format!("failed to read {}", self.input.display()))?
        };

        serde_json::from_str(&text).wrap_err("input is not valid JSON")
    }

    fn schedule(&self) -> Result<Schedule> {
        let value: Value = self.read()?;
        let schedule: Schedule = if self.listing {
            normalize_listing(&value)?
        } else {
            normalize(&value)?
        };
        debug!(kind = %schedule.kind(), "Loaded schedule");
        Ok(schedule)
    }
}

/// The instant to evaluate and the spot's offset from UTC.
#[derive(Debug, Clone, ClapArgs)]
struct ClockArgs {
    /// Instant to evaluate, RFC 3339 (defaults to now)
    #[arg(long)]
    at: Option<DateTime<Utc>>,

    /// Offset of the spot's local time from UTC, in minutes
    #[arg(long, allow_hyphen_values = true, conflicts_with = "timezone")]
    offset_minutes: Option<i32>,

    /// IANA timezone of the spot, e.g. `Europe/Bucharest`
    #[arg(long, required_unless_present = "offset_minutes")]
    timezone: Option<String>,
}

impl ClockArgs {
    fn resolve(&self) -> Result<(DateTime<Utc>, i32)> {
        let instant: DateTime<Utc> = self.at.unwrap_or_else(Utc::now);

        let offset: i32 = match (&self.offset_minutes, &self.timezone) {
            (Some(minutes), _) => *minutes,
            (None, Some(tz)) => utc_offset_minutes(tz, instant)?,
            (None, None) => bail!("either --offset-minutes or --timezone is required"),
        };

        debug!(%instant, offset, "Resolved local clock");
        Ok((instant, offset))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clap::CommandFactory;

    fn clock_of(args: &[&str]) -> ClockArgs {
        match Args::try_parse_from(args).unwrap().command {
            Command::IsOpen { clock, .. } | Command::Next { clock, .. } => clock,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_negative_offset_is_accepted() {
        let clock: ClockArgs = clock_of(&[
            "spotpark",
            "is-open",
            "schedule.json",
            "--offset-minutes",
            "-300",
            "--at",
            "2026-03-07T20:00:00Z",
        ]);
        let (instant, offset) = clock.resolve().unwrap();
        assert_eq!(offset, -300);
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 3, 7, 20, 0, 0).unwrap());
    }

    #[test]
    fn test_timezone_resolves_offset_at_instant() {
        let clock: ClockArgs = clock_of(&[
            "spotpark",
            "next",
            "-",
            "--timezone",
            "Europe/Bucharest",
            "--at",
            "2026-07-01T12:00:00Z",
        ]);
        let (_, offset) = clock.resolve().unwrap();
        assert_eq!(offset, 180);
    }

    #[test]
    fn test_unknown_timezone_is_an_error() {
        let clock: ClockArgs = clock_of(&[
            "spotpark",
            "next",
            "-",
            "--timezone",
            "Nowhere/Special",
        ]);
        assert!(clock.resolve().is_err());
    }

    #[test]
    fn test_clock_requires_offset_or_timezone() {
        assert!(Args::try_parse_from(["spotpark", "is-open", "schedule.json"]).is_err());
    }

    #[test]
    fn test_offset_and_timezone_conflict() {
        assert!(
            Args::try_parse_from([
                "spotpark",
                "is-open",
                "schedule.json",
                "--offset-minutes",
                "180",
                "--timezone",
                "Europe/Bucharest",
            ])
            .is_err()
        );
    }

    #[test]
    fn test_listing_flag() {
        let args: Args =
            Args::try_parse_from(["spotpark", "validate", "--listing", "spot.json"]).unwrap();
        match args.command {
            Command::Validate { input } => {
                assert!(input.listing);
                assert_eq!(input.input, PathBuf::from("spot.json"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
