//! Daytime is a small library of value types for wall-clock arithmetic. It
//! provides a point within a single day ([`TimeOfDay`]) and an unbounded span
//! of whole seconds ([`Duration`]).
//!
//! Both types are immutable and [`Copy`]. They are validated once, at
//! construction, and every value that exists afterwards is valid. Arithmetic
//! between a [`TimeOfDay`] and a [`Duration`] wraps around midnight, so the
//! result always lands inside the same 24 hour day.
//!
//! # String representation
//! Each type has exactly one canonical string form, produced by its
//! [`Display`](core::fmt::Display) implementation and accepted by its
//! [`FromStr`](core::str::FromStr) implementation:
//!
//! | Type          | Form       | Example      |
//! |---------------|------------|--------------|
//! | [`TimeOfDay`] | `HH:MM:SS` | `"07:05:00"` |
//! | [`Duration`]  | `H:MM:SS`  | `"148:59:59"`|
//!
//! The hour count of a [`Duration`] is never padded, so `"00:00:00"` is *not*
//! a valid duration while `"0:00:00"` is.
//!
//! # Example
//! ```
//! use daytime::{Duration, TimeOfDay};
//!
//! let departure: TimeOfDay = "22:30:00".parse().unwrap();
//! let trip = Duration::new(3, 45, 0).unwrap();
//!
//! assert_eq!((departure + trip).to_string(), "02:15:00");
//! assert_eq!((trip * 2).to_string(), "7:30:00");
//! ```
//!
//! # Features
//! * `serde`: (de)serialize both types as their canonical string.

mod duration;
mod error;
mod parse;
mod time_of_day;

pub use duration::Duration;
pub use error::Error;
pub use time_of_day::TimeOfDay;

/// Number of seconds in one hour
pub(crate) const SECONDS_PER_HOUR: u64 = 60 * 60;

/// Number of seconds in one day
pub(crate) const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
