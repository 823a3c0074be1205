use chrono::{
    DateTime, Datelike, Days, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone,
    Timelike,
};

use crate::consts::{
    FIRST_DAY, MAX_EPOCH_MILLIS, MIN_EPOCH_MILLIS, MONTHS_PER_YEAR, MS_PER_HOUR, MS_PER_MINUTE,
    MS_PER_SECOND,
};
use crate::{Input, Instant};

/// Calendar arithmetic over the local-time rules of `Tz`.
///
/// `Calendar::local()` follows the host's zone. Any other `chrono` zone can
/// be plugged in with [`Calendar::new`]; the operations are the same.
///
/// Every operation is a pure function of its arguments: inputs are
/// canonicalized into fresh instants on each call and nothing is cached or
/// mutated, so a calendar can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Calendar<Tz: TimeZone = chrono::Local> {
    tz: Tz,
}

impl Calendar<chrono::Local> {
    /// Calendar following the host's local-time rules
    pub const fn local() -> Self {
        Self { tz: chrono::Local }
    }
}

impl Default for Calendar<chrono::Local> {
    fn default() -> Self {
        Self::local()
    }
}

impl<Tz: TimeZone> Calendar<Tz> {
    /// Calendar following the local-time rules of `tz`
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Returns the zone whose rules define local time
    pub const fn time_zone(&self) -> &Tz {
        &self.tz
    }

    /// Converts `input` into a fresh instant in this calendar's zone.
    ///
    /// Instants are copied at millisecond precision. Finite timestamps are
    /// truncated to whole milliseconds since the epoch. Everything else,
    /// text included, becomes the invalid instant; text is never parsed.
    pub fn to_instant(&self, input: impl Into<Input<Tz>>) -> Instant<Tz> {
        match input.into() {
            Input::Instant(instant) => instant
                .as_datetime()
                .map_or_else(Instant::invalid, |dt| Instant::clip(&dt.with_timezone(&self.tz))),
            Input::Timestamp(ms) => timestamp_millis(ms)
                .map_or_else(Instant::invalid, |ms| Instant::from_epoch_millis(ms, &self.tz)),
            Input::Text(_) | Input::Bool(_) | Input::Null => Instant::invalid(),
        }
    }

    /// Canonicalizes `input` and reports whether it names a real instant
    pub fn is_valid(&self, input: impl Into<Input<Tz>>) -> bool {
        self.to_instant(input).is_valid()
    }

    /// Builds the instant for the given local wall-clock fields.
    ///
    /// Fields may overflow: month 12 is January of the next year, day 0 is
    /// the last day of the previous month, hour 24 is midnight of the next
    /// day, and so on. Returns the invalid instant when the result leaves the
    /// representable range.
    #[allow(clippy::too_many_arguments)]
    pub fn instant_at(
        &self,
        year: i64,
        month0: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    ) -> Instant<Tz> {
        let ms_of_day = hour
            .checked_mul(MS_PER_HOUR)
            .and_then(|ms| ms.checked_add(minute.checked_mul(MS_PER_MINUTE)?))
            .and_then(|ms| ms.checked_add(second.checked_mul(MS_PER_SECOND)?))
            .and_then(|ms| ms.checked_add(millisecond));
        match (make_date(year, month0, day), ms_of_day) {
            (Some(date), Some(ms_of_day)) => self.resolve(date, ms_of_day),
            _ => Instant::invalid(),
        }
    }

    /// Resolves a local calendar date plus milliseconds past local midnight.
    ///
    /// Repeated wall-clock times take the earlier instant. Skipped ones are
    /// read with the offset in force before the transition, which pushes the
    /// wall clock forward by the length of the gap.
    pub(crate) fn resolve(&self, date: NaiveDate, ms_of_day: i64) -> Instant<Tz> {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .zip(TimeDelta::try_milliseconds(ms_of_day))
            .and_then(|(midnight, delta)| midnight.checked_add_signed(delta));
        naive
            .and_then(|naive| self.local_datetime(&naive))
            .map_or_else(Instant::invalid, |dt| Instant::clip(&dt))
    }

    fn local_datetime(&self, naive: &NaiveDateTime) -> Option<DateTime<Tz>> {
        match self.tz.from_local_datetime(naive) {
            LocalResult::Single(dt) => Some(dt),
            LocalResult::Ambiguous(earliest, _) => Some(earliest),
            LocalResult::None => {
                let before = naive.checked_sub_days(Days::new(1))?;
                let offset = self.tz.offset_from_utc_datetime(&before).fix();
                let shift = TimeDelta::try_seconds(i64::from(offset.local_minus_utc()))?;
                let utc = naive.checked_sub_signed(shift)?;
                Some(self.tz.from_utc_datetime(&utc))
            }
        }
    }
}

/// Local fields of a valid instant as (year, month0, day, ms past midnight)
pub(crate) fn local_fields<Tz: TimeZone>(dt: &DateTime<Tz>) -> (i64, i64, i64, i64) {
    let ms_of_day = i64::from(dt.num_seconds_from_midnight()) * MS_PER_SECOND
        + i64::from(dt.timestamp_subsec_millis());
    (
        i64::from(dt.year()),
        i64::from(dt.month0()),
        i64::from(dt.day()),
        ms_of_day,
    )
}

/// Normalizes (year, month0, day) the way overflowing calendar fields are
/// normalized: the month carries into the year, and the day counts forward
/// from the first of that month, so day 0 is the last day of the month
/// before.
pub(crate) fn make_date(year: i64, month0: i64, day: i64) -> Option<NaiveDate> {
    let year = year.checked_add(month0.div_euclid(MONTHS_PER_YEAR))?;
    let month = month0.rem_euclid(MONTHS_PER_YEAR);
    let first = NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month + 1).ok()?,
        1,
    )?;
    first.checked_add_signed(TimeDelta::try_days(day.checked_sub(FIRST_DAY)?)?)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn timestamp_millis(ms: f64) -> Option<i64> {
    if !ms.is_finite() {
        return None;
    }
    let ms = ms.trunc();
    // Checked before the cast; both bounds are exact in f64
    if ms < MIN_EPOCH_MILLIS as f64 || ms > MAX_EPOCH_MILLIS as f64 {
        return None;
    }
    Some(ms as i64)
}
