//! Reading integers out of free-form text controls.
//!
//! All readers share one lenient rule: leading whitespace is skipped, one
//! optional sign is accepted and the longest run of ASCII digits is taken.
//! Anything after the digits is ignored, so `"12abc"` reads as 12.

use crate::error::{ErrorCode, InputError};

const TOO_LARGE_MESSAGE: &str = "Error: the number is too large.";

struct Leading<'a> {
    negative: bool,
    digits: &'a str,
}

fn leading(raw: &str) -> Result<Leading<'_>, InputError> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(InputError::new(
            ErrorCode::NotNumeric,
            format!("Error: '{}' is not a number.", raw.trim()),
        ));
    }
    Ok(Leading {
        negative,
        digits: &rest[..digits_len],
    })
}

fn too_large() -> InputError {
    InputError::new(ErrorCode::TooLarge, TOO_LARGE_MESSAGE)
}

impl Leading<'_> {
    fn is_zero(&self) -> bool {
        self.digits.bytes().all(|b| b == b'0')
    }

    fn to_u64(&self) -> Option<u64> {
        self.digits.bytes().try_fold(0u64, |acc, b| {
            acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
        })
    }

    fn to_i64(&self) -> Option<i64> {
        self.digits.bytes().try_fold(0i64, |acc, b| {
            let digit = i64::from(b - b'0');
            let acc = acc.checked_mul(10)?;
            if self.negative {
                acc.checked_sub(digit)
            } else {
                acc.checked_add(digit)
            }
        })
    }
}

/// Signed leading integer of `raw`; `TooLarge` past the `i64` range.
pub fn parse_integer(raw: &str) -> Result<i64, InputError> {
    leading(raw)?.to_i64().ok_or_else(too_large)
}

/// Non-negative leading integer of `raw`, over the full `u64` range. A
/// negative number is `OutOfDomain` (`-0` reads as 0); more than `u64::MAX`
/// is `TooLarge`.
pub fn parse_unsigned(raw: &str) -> Result<u64, InputError> {
    let leading = leading(raw)?;
    if leading.negative && !leading.is_zero() {
        return Err(InputError::new(
            ErrorCode::OutOfDomain,
            "Error: the number is negative.",
        ));
    }
    leading.to_u64().ok_or_else(too_large)
}

/// Like [`parse_integer`], but a number past the `i64` range saturates to
/// `i64::MIN`/`i64::MAX` instead of failing.
pub fn parse_integer_saturating(raw: &str) -> Result<i64, InputError> {
    let leading = leading(raw)?;
    Ok(leading.to_i64().unwrap_or(if leading.negative {
        i64::MIN
    } else {
        i64::MAX
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_plain_and_signed_integers() {
        assert_eq!(parse_integer("42"), Ok(42));
        assert_eq!(parse_integer("  -7"), Ok(-7));
        assert_eq!(parse_integer("+15"), Ok(15));
    }

    #[test]
    fn ignores_trailing_garbage() {
        assert_eq!(parse_integer("12abc"), Ok(12));
        assert_eq!(parse_integer("3.9"), Ok(3));
        assert_eq!(parse_unsigned("8 bits"), Ok(8));
    }

    #[test]
    fn rejects_text_without_leading_digits() {
        for raw in ["", "   ", "abc", "-", "x12"] {
            let err = parse_integer(raw).expect_err("should reject");
            assert_eq!(err.code, ErrorCode::NotNumeric, "input {raw:?}");
            let err = parse_unsigned(raw).expect_err("should reject");
            assert_eq!(err.code, ErrorCode::NotNumeric, "input {raw:?}");
        }
    }

    #[test]
    fn overflow_is_too_large() {
        let err = parse_integer("99999999999999999999").expect_err("overflow");
        assert_eq!(err.code, ErrorCode::TooLarge);
        assert_eq!(parse_integer("-9223372036854775808"), Ok(i64::MIN));
    }

    #[test]
    fn unsigned_covers_the_whole_u64_range() {
        assert_eq!(parse_unsigned("9223372036854775808"), Ok(1 << 63));
        assert_eq!(parse_unsigned("18446744073709551615"), Ok(u64::MAX));
        assert_eq!(parse_unsigned("-0"), Ok(0));

        let err = parse_unsigned("18446744073709551616").expect_err("overflow");
        assert_eq!(err.code, ErrorCode::TooLarge);
        assert_eq!(err.message, "Error: the number is too large.");

        let err = parse_unsigned("-1").expect_err("negative");
        assert_eq!(err.code, ErrorCode::OutOfDomain);
    }

    #[test]
    fn saturating_keeps_the_sign_of_huge_numbers() {
        assert_eq!(parse_integer_saturating("99999999999999999999"), Ok(i64::MAX));
        assert_eq!(parse_integer_saturating("-99999999999999999999"), Ok(i64::MIN));
        assert_eq!(parse_integer_saturating("-12"), Ok(-12));
        assert!(parse_integer_saturating("none").is_err());
    }
}
