/// Months in a Gregorian year
pub const MONTHS_PER_YEAR: i64 = 12;

/// First day of month, used for lower bounds
pub const FIRST_DAY: i64 = 1;
/// Day 0 of a month resolves to the last day of the previous month
pub const DAY_ZERO: i64 = 0;

/// Milliseconds in one second
pub const MS_PER_SECOND: i64 = 1_000;
/// Milliseconds in one minute
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
/// Milliseconds in one hour
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Millisecond offset of 23:59:59.999 from local midnight
pub const LAST_MS_OF_DAY: i64 = MS_PER_DAY - 1;

/// Latest valid instant, in milliseconds after the epoch
/// (100,000,000 days after 1970-01-01T00:00:00Z).
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;
/// Earliest valid instant, in milliseconds after the epoch. This is chrono's
/// lower limit (January 1 of year -262143), which falls short of
/// 100,000,000 days before the epoch.
pub const MIN_EPOCH_MILLIS: i64 = -8_334_601_228_800_000;

/// Rendering used for an invalid instant
pub const INVALID_DATE: &str = "Invalid Date";
