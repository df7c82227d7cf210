//! Text rendering of results and traces for the front ends.

use serde::Serialize;
use shared::{
    domain::{BottleCode, Conversion, FactorStep, Factorization},
    error::InputError,
};

/// What a result slot and a step-trace slot should show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub result: String,
    pub steps: Vec<String>,
    /// Closing explanation shown under the steps.
    pub note: Option<String>,
    /// Whether `steps` is an ordered list.
    pub ordered: bool,
}

/// An error replaces the result and clears any previous trace.
pub fn error(err: &InputError) -> Presentation {
    Presentation {
        result: err.message.clone(),
        ..Presentation::default()
    }
}

pub fn conversion(conversion: &Conversion) -> Presentation {
    if conversion.steps.is_empty() {
        return Presentation {
            result: conversion.digits.clone(),
            steps: Vec::new(),
            note: Some("The number is 0, there are no divisions to perform.".into()),
            ordered: true,
        };
    }

    let result = format!("{}{}", conversion.digits, conversion.radix.subscript());
    let steps = conversion
        .steps
        .iter()
        .map(|step| {
            format!(
                "{} / {} = {}  (remainder: {} -> digit: {})",
                step.dividend, step.divisor, step.quotient, step.remainder, step.digit
            )
        })
        .collect();

    Presentation {
        result,
        steps,
        note: Some("Read the remainders from the last division back to the first.".into()),
        ordered: true,
    }
}

pub fn factorization(factorization: &Factorization) -> Presentation {
    let result = factorization
        .factors
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" x ");

    let steps = factorization
        .steps
        .iter()
        .map(|step| match *step {
            FactorStep::Divided {
                remaining,
                factor,
                quotient,
            } => format!("{remaining} / {factor} = {quotient}  (factor found: {factor})"),
            FactorStep::RemainingPrime { value } => {
                format!("The remaining number ({value}) is prime. It is added as a factor.")
            }
        })
        .collect();

    Presentation {
        result,
        steps,
        note: None,
        ordered: false,
    }
}

pub fn bottle(code: &BottleCode) -> Presentation {
    Presentation {
        result: code.binary(),
        steps: code
            .cups()
            .map(|(label, on)| format!("Cup {label}: {}", if on { "on" } else { "off" }))
            .collect(),
        note: None,
        ordered: false,
    }
}

impl Presentation {
    /// Plain-text block: result line, then the numbered or bulleted steps.
    pub fn render(&self) -> String {
        let mut out = self.result.clone();
        for (i, step) in self.steps.iter().enumerate() {
            out.push('\n');
            if self.ordered {
                out.push_str(&format!("{:>3}. {step}", i + 1));
            } else {
                out.push_str(&format!("  - {step}"));
            }
        }
        if let Some(note) = &self.note {
            out.push('\n');
            out.push_str(note);
        }
        out
    }
}

#[cfg(test)]
#[path = "tests/present_tests.rs"]
mod tests;
