use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, InputError};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

pub const BOTTLE_BITS: usize = 4;
pub const MAX_BOTTLE: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Radix {
    Binary,
    Hexadecimal,
}

impl Radix {
    pub fn value(self) -> u64 {
        match self {
            Radix::Binary => 2,
            Radix::Hexadecimal => 16,
        }
    }

    /// Subscript appended to a converted result, e.g. `1101₂`.
    pub fn subscript(self) -> &'static str {
        match self {
            Radix::Binary => "₂",
            Radix::Hexadecimal => "₁₆",
        }
    }

    /// Maps a remainder in `0..radix` to its digit; 10-15 become 'A'-'F'.
    pub fn digit(self, remainder: u64) -> char {
        debug_assert!(remainder < self.value());
        DIGITS[remainder as usize] as char
    }
}

impl TryFrom<u32> for Radix {
    type Error = InputError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Radix::Binary),
            16 => Ok(Radix::Hexadecimal),
            other => Err(InputError::new(
                ErrorCode::OutOfDomain,
                format!("Error: unsupported radix {other}; use 2 or 16."),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionStep {
    pub dividend: u64,
    pub divisor: u64,
    pub quotient: u64,
    pub remainder: u64,
    pub digit: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: u64,
    pub radix: Radix,
    pub digits: String,
    pub steps: Vec<DivisionStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FactorStep {
    Divided {
        remaining: u64,
        factor: u64,
        quotient: u64,
    },
    RemainingPrime {
        value: u64,
    },
}

impl FactorStep {
    pub fn factor(&self) -> u64 {
        match *self {
            FactorStep::Divided { factor, .. } => factor,
            FactorStep::RemainingPrime { value } => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factorization {
    pub value: u64,
    pub factors: Vec<u64>,
    pub steps: Vec<FactorStep>,
}

/// A bottle number in `0..=15` and its four "cups", most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottleCode {
    pub value: u8,
    pub bits: [bool; BOTTLE_BITS],
}

impl BottleCode {
    pub fn binary(&self) -> String {
        self.bits.iter().map(|on| if *on { '1' } else { '0' }).collect()
    }

    /// Cups paired with their label; the leftmost cup is labelled 3.
    pub fn cups(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.bits
            .iter()
            .enumerate()
            .map(|(i, on)| (BOTTLE_BITS - 1 - i, *on))
    }
}
