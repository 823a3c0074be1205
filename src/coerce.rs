use crate::Amount;

/// Coerces `amount` to an integer, truncating toward zero.
///
/// Booleans and null yield `None`, as does any value that is not a finite
/// number once coerced. Text is read as a decimal number, or as an unsigned
/// integer when prefixed with `0x`, `0o` or `0b` (blank text is zero).
/// Otherwise positive values are floored and negative values ceiled, so
/// `-2.5` becomes `-2` and `2.5` becomes `2`.
pub fn to_integer(amount: impl Into<Amount>) -> Option<i64> {
    match amount.into() {
        Amount::Integer(value) => Some(value),
        Amount::Number(value) => truncate(value),
        Amount::Text(text) => text_to_number(&text).and_then(truncate),
        Amount::Bool(_) | Amount::Null => None,
    }
}

fn text_to_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match radix_of(trimmed) {
        Some(radix) => parse_radix(trimmed.get(2..)?, radix),
        None => trimmed.parse::<f64>().ok(),
    }
}

fn radix_of(text: &str) -> Option<u32> {
    let prefix = text.get(..2)?;
    [("0x", 16), ("0o", 8), ("0b", 2)]
        .into_iter()
        .find(|(marker, _)| prefix.eq_ignore_ascii_case(marker))
        .map(|(_, radix)| radix)
}

// No sign, no fraction; digits beyond u64 still accumulate as a float
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn truncate(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = if value < 0.0 {
        value.ceil()
    } else {
        value.floor()
    };
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_integer_cases() {
        struct TestCase {
            amount:      Amount,
            expected:    Option<i64>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                amount:      Amount::Number(2.5),
                expected:    Some(2),
                description: "positive fraction floors",
            },
            TestCase {
                amount:      Amount::Number(-2.5),
                expected:    Some(-2),
                description: "negative fraction ceils",
            },
            TestCase {
                amount:      Amount::Number(-0.9),
                expected:    Some(0),
                description: "small negative truncates to zero",
            },
            TestCase {
                amount:      Amount::Integer(-7),
                expected:    Some(-7),
                description: "integers pass through",
            },
            TestCase {
                amount:      Amount::Bool(true),
                expected:    None,
                description: "true is rejected",
            },
            TestCase {
                amount:      Amount::Bool(false),
                expected:    None,
                description: "false is rejected",
            },
            TestCase {
                amount:      Amount::Null,
                expected:    None,
                description: "null is rejected",
            },
            TestCase {
                amount:      Amount::Text("abc".to_owned()),
                expected:    None,
                description: "non-numeric text",
            },
            TestCase {
                amount:      Amount::Text(" -3.7 ".to_owned()),
                expected:    Some(-3),
                description: "numeric text",
            },
            TestCase {
                amount:      Amount::Text(String::new()),
                expected:    Some(0),
                description: "blank text is zero",
            },
            TestCase {
                amount:      Amount::Text(" 0x1F ".to_owned()),
                expected:    Some(31),
                description: "hexadecimal text",
            },
            TestCase {
                amount:      Amount::Text("0O17".to_owned()),
                expected:    Some(15),
                description: "octal text",
            },
            TestCase {
                amount:      Amount::Text("0b101".to_owned()),
                expected:    Some(5),
                description: "binary text",
            },
            TestCase {
                amount:      Amount::Text("-0x10".to_owned()),
                expected:    None,
                description: "signed prefixed text",
            },
            TestCase {
                amount:      Amount::Text("0x".to_owned()),
                expected:    None,
                description: "prefix without digits",
            },
            TestCase {
                amount:      Amount::Text("0b102".to_owned()),
                expected:    None,
                description: "digit outside the radix",
            },
            TestCase {
                amount:      Amount::Number(f64::NAN),
                expected:    None,
                description: "NaN",
            },
            TestCase {
                amount:      Amount::Number(f64::INFINITY),
                expected:    None,
                description: "infinity",
            },
            TestCase {
                amount:      Amount::Number(1e300),
                expected:    None,
                description: "beyond i64",
            },
        ];

        for case in cases {
            assert_eq!(
                to_integer(case.amount),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_to_integer_conversions() {
        assert_eq!(to_integer(5), Some(5));
        assert_eq!(to_integer(-2.5), Some(-2));
        assert_eq!(to_integer("12"), Some(12));
        assert_eq!(to_integer("0x10"), Some(16));
        assert_eq!(to_integer(true), None);
        assert_eq!(to_integer(None::<f64>), None);
    }
}
