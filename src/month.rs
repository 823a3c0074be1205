use chrono::TimeZone;

use crate::calendar::{local_fields, make_date};
use crate::consts::{DAY_ZERO, FIRST_DAY, LAST_MS_OF_DAY};
use crate::{Amount, Calendar, Input, Instant, to_integer};

impl<Tz: TimeZone> Calendar<Tz> {
    /// Local month index, 0 = January
    pub fn month(&self, date: impl Into<Input<Tz>>) -> Option<u32> {
        self.to_instant(date).month0()
    }

    /// Local weekday index, 0 = Sunday
    pub fn weekday(&self, date: impl Into<Input<Tz>>) -> Option<u32> {
        self.to_instant(date).weekday()
    }

    /// Number of days in the local month of `date`.
    ///
    /// Read off day 0 of the following month at local midnight, which is the
    /// last day of `date`'s month, leap years included.
    pub fn days_in_month(&self, date: impl Into<Input<Tz>>) -> Option<u32> {
        let instant = self.to_instant(date);
        let (year, month0, _, _) = local_fields(instant.as_datetime()?);
        let last = make_date(year, month0 + 1, DAY_ZERO)?;
        self.resolve(last, 0).day()
    }

    /// First day of the local month of `date`, at 00:00:00.000
    pub fn start_of_month(&self, date: impl Into<Input<Tz>>) -> Instant<Tz> {
        let instant = self.to_instant(date);
        let Some(dt) = instant.as_datetime() else {
            return Instant::invalid();
        };
        let (year, month0, _, _) = local_fields(dt);
        make_date(year, month0, FIRST_DAY)
            .map_or_else(Instant::invalid, |first| self.resolve(first, 0))
    }

    /// Last day of the local month of `date`, at 23:59:59.999
    pub fn end_of_month(&self, date: impl Into<Input<Tz>>) -> Instant<Tz> {
        let instant = self.to_instant(date);
        let Some(dt) = instant.as_datetime() else {
            return Instant::invalid();
        };
        let (year, month0, _, _) = local_fields(dt);
        make_date(year, month0 + 1, DAY_ZERO)
            .map_or_else(Instant::invalid, |last| self.resolve(last, LAST_MS_OF_DAY))
    }

    /// Adds `amount` months to `date`, clamping to the end of the target
    /// month when the original day does not exist there.
    ///
    /// Jan 31 plus one month is the last day of February. The time of day is
    /// kept from `date` whenever the day is kept. A zero amount returns the
    /// canonicalized `date` untouched, so wall-clock fields are never
    /// re-derived across a DST transition for a no-op.
    pub fn add_months(&self, date: impl Into<Input<Tz>>, amount: impl Into<Amount>) -> Instant<Tz> {
        let instant = self.to_instant(date);
        let Some(amount) = to_integer(amount) else {
            return Instant::invalid();
        };
        let Some(dt) = instant.as_datetime() else {
            return Instant::invalid();
        };
        if amount == 0 {
            return instant;
        }

        let (year, month0, day_of_month, ms_of_day) = local_fields(dt);
        let Some(target) = month0.checked_add(amount).and_then(|m| m.checked_add(1)) else {
            return Instant::invalid();
        };
        let end_of_desired_month = make_date(year, target, DAY_ZERO)
            .map_or_else(Instant::invalid, |last| self.resolve(last, ms_of_day));
        let Some(end) = end_of_desired_month.as_datetime() else {
            return Instant::invalid();
        };

        let (target_year, target_month0, days_in_target_month, _) = local_fields(end);
        if day_of_month >= days_in_target_month {
            return end_of_desired_month;
        }

        // The original time of day is reapplied rather than taken from
        // `end_of_desired_month`, whose wall clock may have moved if a
        // transition fell on the last day of the target month.
        make_date(target_year, target_month0, day_of_month)
            .map_or_else(Instant::invalid, |day| self.resolve(day, ms_of_day))
    }

    /// Subtracts `amount` months from `date`; see [`Calendar::add_months`]
    pub fn sub_months(&self, date: impl Into<Input<Tz>>, amount: impl Into<Amount>) -> Instant<Tz> {
        let negated = to_integer(amount).and_then(i64::checked_neg);
        self.add_months(date, negated)
    }
}
