//! Caller-side reporting of input misuse.
//!
//! The arithmetic in this crate never logs: misused input simply becomes an
//! invalid instant. Callers that want to surface the mistake run their
//! arguments through [`check`] first, which returns the [`Misuse`] and, with
//! the `logging` feature enabled, emits a warning through the `log` crate.

use chrono::TimeZone;

use crate::{Input, Misuse};

/// Reports whether `input` is a misuse of `operation`'s date argument.
#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
pub fn check<Tz: TimeZone>(operation: &str, input: &Input<Tz>) -> Option<Misuse> {
    let misuse = input.misuse();
    if let Some(misuse) = misuse {
        warn!("{operation}: {misuse}");
    } else {
        debug!("{operation}: input accepted");
    }
    misuse
}

/// Like [`check`], over every date argument of one call
pub fn check_all<'a, Tz, I>(operation: &str, inputs: I) -> Vec<Misuse>
where
    Tz: TimeZone + 'a,
    I: IntoIterator<Item = &'a Input<Tz>>,
{
    inputs
        .into_iter()
        .filter_map(|input| check(operation, input))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Interval;
    use chrono::Utc;

    #[test]
    fn test_check_flags_text() {
        let input = Input::<Utc>::from("2014-09-01");
        assert_eq!(check("add_months", &input), Some(Misuse::TextInput));
    }

    #[test]
    fn test_check_accepts_timestamps() {
        let input = Input::<Utc>::from(0_i64);
        assert_eq!(check("add_months", &input), None);
    }

    #[test]
    fn test_check_all_interval_endpoints() {
        let interval = Interval::<Utc>::new("2014-09-01", 0_i64);
        let misuses = check_all("is_within_interval", [&interval.start, &interval.end]);
        assert_eq!(misuses, vec![Misuse::TextInput]);
    }

    #[test]
    fn test_misuse_display() {
        assert!(Misuse::TextInput.to_string().contains("never parsed"));
    }
}
