use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::Serialize;

use crate::consts::{INVALID_DATE, MAX_EPOCH_MILLIS, MIN_EPOCH_MILLIS};

/// A point in time with millisecond resolution, viewed through the local-time
/// rules of `Tz`.
///
/// An instant is either valid or invalid. Invalid instants stand in for
/// malformed input and flow through every operation of this crate without
/// raising: any arithmetic that consumes one produces another.
///
/// Two instants are equal iff their epoch-millisecond values are equal. An
/// invalid instant is equal to nothing, itself included.
#[derive(Debug, Clone)]
pub struct Instant<Tz: TimeZone = Local> {
    inner: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> Instant<Tz> {
    /// Returns the invalid instant
    pub const fn invalid() -> Self {
        Self { inner: None }
    }

    /// Builds the instant `ms` milliseconds after the Unix epoch.
    /// Returns an invalid instant outside the representable range.
    pub fn from_epoch_millis(ms: i64, tz: &Tz) -> Self {
        if !(MIN_EPOCH_MILLIS..=MAX_EPOCH_MILLIS).contains(&ms) {
            return Self::invalid();
        }
        Self {
            inner: tz.timestamp_millis_opt(ms).single(),
        }
    }

    /// Truncates `dt` to millisecond precision, keeping its zone.
    pub(crate) fn clip(dt: &DateTime<Tz>) -> Self {
        Self::from_epoch_millis(dt.timestamp_millis(), &dt.timezone())
    }

    /// Returns true unless this is the invalid instant
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns the underlying date-time if valid
    #[inline]
    pub const fn as_datetime(&self) -> Option<&DateTime<Tz>> {
        self.inner.as_ref()
    }

    /// Signed milliseconds since the Unix epoch
    pub fn epoch_millis(&self) -> Option<i64> {
        self.inner.as_ref().map(DateTime::timestamp_millis)
    }

    /// Local year
    pub fn year(&self) -> Option<i32> {
        self.inner.as_ref().map(Datelike::year)
    }

    /// Local month, 0-based (January = 0)
    pub fn month0(&self) -> Option<u32> {
        self.inner.as_ref().map(Datelike::month0)
    }

    /// Local day of month, 1-based
    pub fn day(&self) -> Option<u32> {
        self.inner.as_ref().map(Datelike::day)
    }

    /// Local hour
    pub fn hour(&self) -> Option<u32> {
        self.inner.as_ref().map(Timelike::hour)
    }

    /// Local minute
    pub fn minute(&self) -> Option<u32> {
        self.inner.as_ref().map(Timelike::minute)
    }

    /// Local second
    pub fn second(&self) -> Option<u32> {
        self.inner.as_ref().map(Timelike::second)
    }

    /// Millisecond within the second
    pub fn millisecond(&self) -> Option<u32> {
        self.inner.as_ref().map(DateTime::timestamp_subsec_millis)
    }

    /// Local weekday, 0 = Sunday through 6 = Saturday
    pub fn weekday(&self) -> Option<u32> {
        self.inner
            .as_ref()
            .map(|dt| dt.weekday().num_days_from_sunday())
    }

    /// The same instant viewed through another zone's local-time rules
    pub fn with_timezone<Z: TimeZone>(&self, tz: &Z) -> Instant<Z> {
        Instant {
            inner: self.inner.as_ref().map(|dt| dt.with_timezone(tz)),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant<Tz> {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::clip(&dt)
    }
}

impl<Tz: TimeZone> PartialEq for Instant<Tz> {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self.epoch_millis(), other.epoch_millis()),
            (Some(a), Some(b)) if a == b
        )
    }
}

impl<Tz: TimeZone> PartialOrd for Instant<Tz> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.epoch_millis(), other.epoch_millis()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => None,
        }
    }
}

impl<Tz: TimeZone> fmt::Display for Instant<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3f%:z")),
            None => f.write_str(INVALID_DATE),
        }
    }
}

impl<Tz: TimeZone> Serialize for Instant<Tz> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.epoch_millis() {
            Some(ms) => serializer.serialize_i64(ms),
            None => serializer.serialize_none(),
        }
    }
}
