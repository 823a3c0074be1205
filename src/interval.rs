use chrono::{Local, TimeZone, Utc};

use crate::{Calendar, Input, Instant};

/// A pair of endpoints, inclusive at both ends.
///
/// Nothing is checked on construction; an inverted interval is only rejected
/// when it is used (see [`Calendar::validate_interval`]).
#[derive(Debug, Clone)]
pub struct Interval<Tz: TimeZone = Local> {
    pub start: Input<Tz>,
    pub end:   Input<Tz>,
}

/// Error type for interval operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntervalError {
    /// Start is after end, or either endpoint is invalid.
    #[error("Invalid interval: start ({start}) is not at or before end ({end})")]
    InvalidInterval { start: Instant<Utc>, end: Instant<Utc> },
}

impl<Tz: TimeZone> Interval<Tz> {
    /// Creates an interval from any two date inputs
    pub fn new(start: impl Into<Input<Tz>>, end: impl Into<Input<Tz>>) -> Self {
        Self {
            start: start.into(),
            end:   end.into(),
        }
    }
}

impl<Tz: TimeZone> Calendar<Tz> {
    /// Canonicalizes both endpoints and checks that start is at or before end.
    ///
    /// # Errors
    /// Returns `IntervalError::InvalidInterval` if start is after end or
    /// either endpoint is invalid.
    pub fn validate_interval(
        &self,
        interval: &Interval<Tz>,
    ) -> Result<(Instant<Tz>, Instant<Tz>), IntervalError> {
        let start = self.to_instant(&interval.start);
        let end = self.to_instant(&interval.end);
        if start <= end {
            return Ok((start, end));
        }
        Err(IntervalError::InvalidInterval {
            start: start.with_timezone(&Utc),
            end:   end.with_timezone(&Utc),
        })
    }

    /// Checks whether `date` lies within `interval`, both ends included.
    /// An invalid `date` is never within.
    ///
    /// # Errors
    /// Returns `IntervalError::InvalidInterval` if the interval is inverted or
    /// has an invalid endpoint; such an interval is a caller bug, not an
    /// empty range.
    pub fn is_within_interval(
        &self,
        date: impl Into<Input<Tz>>,
        interval: &Interval<Tz>,
    ) -> Result<bool, IntervalError> {
        let date = self.to_instant(date);
        let (start, end) = self.validate_interval(interval)?;
        Ok(start <= date && date <= end)
    }
}
