use shared::{
    domain::{FactorStep, Factorization},
    error::{ErrorCode, InputError},
    input::parse_unsigned,
};
use tracing::debug;

const GREATER_THAN_ONE_MESSAGE: &str = "Error: enter an integer greater than 1.";

/// Trial division. Twos are stripped first, then odd candidates up to the square
/// root of what remains, each divided out fully before moving on.
pub fn factorize(value: u64) -> Result<Factorization, InputError> {
    if value <= 1 {
        return Err(InputError::new(
            ErrorCode::OutOfDomain,
            GREATER_THAN_ONE_MESSAGE,
        ));
    }

    let mut remaining = value;
    let mut factors = Vec::new();
    let mut steps = Vec::new();

    let mut divide_out = |candidate: u64, remaining: &mut u64| {
        while *remaining % candidate == 0 {
            let quotient = *remaining / candidate;
            factors.push(candidate);
            steps.push(FactorStep::Divided {
                remaining: *remaining,
                factor: candidate,
                quotient,
            });
            *remaining = quotient;
        }
    };

    divide_out(2, &mut remaining);

    let mut candidate = 3;
    // `candidate <= remaining / candidate` is `candidate² <= remaining` without overflow.
    while candidate <= remaining / candidate {
        divide_out(candidate, &mut remaining);
        candidate += 2;
    }

    if remaining > 1 {
        factors.push(remaining);
        steps.push(FactorStep::RemainingPrime { value: remaining });
    }

    debug!(value, ?factors, "factorized");
    Ok(Factorization {
        value,
        factors,
        steps,
    })
}

pub fn factorize_input(raw: &str) -> Result<Factorization, InputError> {
    let value = parse_unsigned(raw).map_err(|err| match err.code {
        ErrorCode::TooLarge => err,
        _ => err.with_message(GREATER_THAN_ONE_MESSAGE),
    })?;
    factorize(value)
}

#[cfg(test)]
#[path = "tests/factor_tests.rs"]
mod tests;
