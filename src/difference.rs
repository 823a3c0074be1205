use chrono::TimeZone;

use crate::consts::MS_PER_MINUTE;
use crate::{Calendar, Input};

impl<Tz: TimeZone> Calendar<Tz> {
    /// Signed milliseconds from `right` to `left`, i.e. `left - right`.
    /// `None` if either side is invalid.
    pub fn difference_in_milliseconds(
        &self,
        left: impl Into<Input<Tz>>,
        right: impl Into<Input<Tz>>,
    ) -> Option<i64> {
        let left = self.to_instant(left).epoch_millis()?;
        let right = self.to_instant(right).epoch_millis()?;
        left.checked_sub(right)
    }

    /// Whole minutes in `left - right`.
    ///
    /// A minute counts only once fully elapsed in the direction of the sign,
    /// so 12:20:00 minus 12:07:59 is 12 and 12:00:00 minus 12:01:59 is -1.
    pub fn difference_in_minutes(
        &self,
        left: impl Into<Input<Tz>>,
        right: impl Into<Input<Tz>>,
    ) -> Option<i64> {
        // Integer division truncates toward zero
        self.difference_in_milliseconds(left, right)
            .map(|ms| ms / MS_PER_MINUTE)
    }
}

#[cfg(test)]
mod tests {
    use crate::Instant;
    use crate::test_utils::{utc, utc_at};

    #[test]
    fn test_difference_in_milliseconds() {
        let left = utc_at(2014, 6, 2, 12, 30, 20, 700);
        let right = utc_at(2014, 6, 2, 12, 30, 20, 600);
        assert_eq!(utc().difference_in_milliseconds(&left, &right), Some(100));
        assert_eq!(utc().difference_in_milliseconds(&right, &left), Some(-100));
    }

    #[test]
    fn test_difference_in_milliseconds_timestamps() {
        assert_eq!(
            utc().difference_in_milliseconds(1_000_000_i64, 999_000_i64),
            Some(1_000)
        );
    }

    #[test]
    fn test_difference_in_minutes_cases() {
        struct TestCase {
            left:        Instant<chrono::Utc>,
            right:       Instant<chrono::Utc>,
            expected:    i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                left:        utc_at(2014, 6, 2, 12, 20, 0, 0),
                right:       utc_at(2014, 6, 2, 12, 7, 59, 0),
                expected:    12,
                description: "partial minute is dropped",
            },
            TestCase {
                left:        utc_at(2014, 6, 2, 12, 0, 0, 0),
                right:       utc_at(2014, 6, 2, 12, 1, 59, 0),
                expected:    -1,
                description: "negative differences truncate toward zero",
            },
            TestCase {
                left:        utc_at(2014, 6, 2, 12, 0, 0, 0),
                right:       utc_at(2014, 6, 2, 12, 0, 59, 999),
                expected:    0,
                description: "less than a minute behind is zero",
            },
            TestCase {
                left:        utc_at(2014, 6, 3, 0, 0, 0, 0),
                right:       utc_at(2014, 6, 2, 0, 0, 0, 0),
                expected:    1_440,
                description: "one day",
            },
        ];

        for case in &cases {
            assert_eq!(
                utc().difference_in_minutes(&case.left, &case.right),
                Some(case.expected),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_difference_with_invalid_side() {
        let valid = utc_at(2014, 6, 2, 12, 0, 0, 0);
        assert_eq!(utc().difference_in_milliseconds(&valid, "yesterday"), None);
        assert_eq!(utc().difference_in_minutes(Instant::<chrono::Utc>::invalid(), &valid), None);
    }
}
