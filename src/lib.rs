//! Calendar arithmetic over local-time instants.
//!
//! Inputs of mixed shape (instants, epoch-millisecond timestamps, or junk)
//! are canonicalized into [`Instant`]s, then run through month-level
//! arithmetic that never overflows into a neighboring month: adding one month
//! to January 31 lands on the last day of February.
//!
//! Malformed input never panics or errors. It becomes an invalid instant,
//! and every operation handed an invalid instant returns an invalid (or
//! `None`) result. The one hard failure is an inverted interval passed to
//! [`is_within_interval`], which is reported as an [`IntervalError`].
//!
//! The free functions here use the host's local time. [`Calendar`] runs the
//! same operations under any `chrono` time zone.
//!
//! ```
//! use calendar_math::{Calendar, add_months};
//! use chrono::Utc;
//!
//! let utc = Calendar::new(Utc);
//! let jan31 = utc.instant_at(2014, 0, 31, 0, 0, 0, 0);
//! let feb = utc.add_months(&jan31, 1);
//! assert_eq!((feb.month0(), feb.day()), (Some(1), Some(28)));
//!
//! assert!(!add_months("2014-01-31", 1).is_valid());
//! ```

#[macro_use]
mod logging;

mod calendar;
mod coerce;
mod consts;
pub mod diagnostics;
mod difference;
mod instant;
mod interval;
mod month;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::Calendar;
pub use coerce::to_integer;
pub use consts::*;
pub use instant::Instant;
pub use interval::{Interval, IntervalError};
pub use types::{Amount, Input, Misuse};

use chrono::Local;

/// Canonicalizes `input` in local time; see [`Calendar::to_instant`]
pub fn to_instant(input: impl Into<Input<Local>>) -> Instant<Local> {
    Calendar::local().to_instant(input)
}

/// See [`Calendar::is_valid`]
pub fn is_valid(input: impl Into<Input<Local>>) -> bool {
    Calendar::local().is_valid(input)
}

/// See [`Calendar::difference_in_milliseconds`]
pub fn difference_in_milliseconds(
    left: impl Into<Input<Local>>,
    right: impl Into<Input<Local>>,
) -> Option<i64> {
    Calendar::local().difference_in_milliseconds(left, right)
}

/// See [`Calendar::difference_in_minutes`]
pub fn difference_in_minutes(
    left: impl Into<Input<Local>>,
    right: impl Into<Input<Local>>,
) -> Option<i64> {
    Calendar::local().difference_in_minutes(left, right)
}

/// Local month index, 0 = January
pub fn month(date: impl Into<Input<Local>>) -> Option<u32> {
    Calendar::local().month(date)
}

/// Local weekday index, 0 = Sunday
pub fn weekday(date: impl Into<Input<Local>>) -> Option<u32> {
    Calendar::local().weekday(date)
}

/// See [`Calendar::days_in_month`]
pub fn days_in_month(date: impl Into<Input<Local>>) -> Option<u32> {
    Calendar::local().days_in_month(date)
}

/// See [`Calendar::start_of_month`]
pub fn start_of_month(date: impl Into<Input<Local>>) -> Instant<Local> {
    Calendar::local().start_of_month(date)
}

/// See [`Calendar::end_of_month`]
pub fn end_of_month(date: impl Into<Input<Local>>) -> Instant<Local> {
    Calendar::local().end_of_month(date)
}

/// See [`Calendar::add_months`]
pub fn add_months(date: impl Into<Input<Local>>, amount: impl Into<Amount>) -> Instant<Local> {
    Calendar::local().add_months(date, amount)
}

/// See [`Calendar::sub_months`]
pub fn sub_months(date: impl Into<Input<Local>>, amount: impl Into<Amount>) -> Instant<Local> {
    Calendar::local().sub_months(date, amount)
}

/// See [`Calendar::is_within_interval`]
///
/// # Errors
/// Returns `IntervalError::InvalidInterval` if the interval is inverted or
/// has an invalid endpoint.
pub fn is_within_interval(
    date: impl Into<Input<Local>>,
    interval: &Interval<Local>,
) -> Result<bool, IntervalError> {
    Calendar::local().is_within_interval(date, interval)
}
