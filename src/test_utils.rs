use chrono::Utc;
use chrono_tz::America::New_York;
use chrono_tz::Europe::Berlin;

use crate::{Calendar, Instant};

pub fn utc() -> Calendar<Utc> {
    Calendar::new(Utc)
}

pub fn new_york() -> Calendar<chrono_tz::Tz> {
    Calendar::new(New_York)
}

pub fn berlin() -> Calendar<chrono_tz::Tz> {
    Calendar::new(Berlin)
}

/// UTC instant from fields with a 0-based month
pub fn utc_at(
    year: i64,
    month0: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    ms: i64,
) -> Instant<Utc> {
    let instant = utc().instant_at(year, month0, day, hour, minute, second, ms);
    assert!(instant.is_valid(), "{year}-{month0}-{day} is out of range");
    instant
}

/// New York wall-clock instant from fields with a 0-based month
pub fn ny_at(year: i64, month0: i64, day: i64, hour: i64, minute: i64) -> Instant<chrono_tz::Tz> {
    new_york().instant_at(year, month0, day, hour, minute, 0, 0)
}

/// Berlin wall-clock instant from fields with a 0-based month
pub fn berlin_at(
    year: i64,
    month0: i64,
    day: i64,
    hour: i64,
    minute: i64,
) -> Instant<chrono_tz::Tz> {
    berlin().instant_at(year, month0, day, hour, minute, 0, 0)
}
