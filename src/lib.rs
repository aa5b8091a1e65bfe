//! Five-field cron expression parser and next-occurrence calculator.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to:
//! - parse classic five-field cron schedule expressions;
//! - compute the time of the next occurrence strictly after a reference instant.
//!
//! It has a single runtime dependency - [chrono](https://crates.io/crates/chrono).
//!
//! _This is not a cron jobs scheduler or runner._ It is the temporal-matching core
//! such a scheduler would call to decide when a job is due.
//!
//! ## Cron schedule format
//!
//! A schedule is five whitespace-separated fields in the classic order:
//!
//! | Field        | Allowed values | Allowed special characters |
//! |--------------|----------------|----------------------------|
//! | Minute       | 0-59           | * , - /                    |
//! | Hour         | 0-23           | * , - /                    |
//! | Day of Month | 1-31           | * , - /                    |
//! | Month        | 1-12           | * , - /                    |
//! | Day of Week  | 0-6 (0=Sunday) | * , - /                    |
//!
//! Patterns meanings:
//! - `*` - every possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`;
//! - `-` - inclusive range of values, i.e. `0-15`;
//! - `/` - repeating values, i.e. `*/12`, `10/5`, `30-59/2`.
//!
//! When both the day-of-month and day-of-week fields are present, a day matches if it
//! satisfies **either** field (classic cron OR policy). Since `*` matches every value,
//! leaving one of the two as `*` makes every day valid regardless of the other field.
//!
//! ## How to use
//!
//! The single public entity of the crate is a [`Schedule`] structure, which has three
//! basic methods:
//! - [new()](Schedule::new): constructor to parse and validate provided expression;
//! - [upcoming()](Schedule::upcoming): returns time of the next occurrence, strictly
//!   after the provided timestamp;
//! - [iter()](Schedule::iter): returns an `Iterator` which produces a series of
//!   timestamps according to the schedule.
//!
//! ### Example with `upcoming`
//! ```rust
//! use chrono::DateTime;
//! use cron_next::{Result, Schedule};
//!
//! fn upcoming() -> Result<()> {
//!     let schedule = Schedule::new("*/5 * * * *")?;
//!     let after = DateTime::parse_from_rfc3339("2025-10-26T10:07:00Z").unwrap();
//!
//!     let next = schedule.upcoming(&after).unwrap();
//!     assert_eq!(next.to_rfc3339(), "2025-10-26T10:10:00+00:00");
//!
//!     Ok(())
//! }
//! # upcoming().unwrap();
//! ```
//!
//! ### Example with `iter`
//! ```rust
//! use chrono::Utc;
//! use cron_next::{Result, Schedule};
//!
//! fn iterator() -> Result<()> {
//!     let schedule = Schedule::new("0 0 * * *")?;
//!     let now = Utc::now();
//!
//!     // Get the next 10 timestamps starting from now
//!     schedule.iter(&now).take(10).for_each(|t| println!("next: {t}"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html)
//!   and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html)
//!   trait implementation for [`Schedule`].

/// Crate specific Error implementation.
pub mod error;
mod field;
/// Cron expression parser and upcoming occurrence generator.
pub mod schedule;

pub use error::{CronError, FieldError};
pub use schedule::Schedule;

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
