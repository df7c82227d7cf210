use shared::{
    domain::{Conversion, DivisionStep, Radix},
    error::{ErrorCode, InputError},
    input::parse_unsigned,
};
use tracing::debug;

const NON_NEGATIVE_MESSAGE: &str = "Error: enter a non-negative integer.";

/// Successive division of `value` by the radix. Remainders come out least
/// significant first, so the digit string is their reverse.
pub fn convert(value: u64, radix: Radix) -> Conversion {
    let divisor = radix.value();
    let mut steps = Vec::new();
    let mut dividend = value;

    while dividend > 0 {
        let quotient = dividend / divisor;
        let remainder = dividend % divisor;
        steps.push(DivisionStep {
            dividend,
            divisor,
            quotient,
            remainder,
            digit: radix.digit(remainder),
        });
        dividend = quotient;
    }

    let digits = if steps.is_empty() {
        "0".to_string()
    } else {
        steps.iter().rev().map(|step| step.digit).collect()
    };

    debug!(value, radix = divisor, %digits, steps = steps.len(), "converted");
    Conversion {
        value,
        radix,
        digits,
        steps,
    }
}

pub fn convert_input(raw: &str, radix: Radix) -> Result<Conversion, InputError> {
    // Too-large keeps its own message; everything else gets the prompt.
    let value = parse_unsigned(raw).map_err(|err| match err.code {
        ErrorCode::TooLarge => err,
        _ => err.with_message(NON_NEGATIVE_MESSAGE),
    })?;
    Ok(convert(value, radix))
}

#[cfg(test)]
#[path = "tests/base_tests.rs"]
mod tests;
