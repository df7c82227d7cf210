//! The locker problem: N closed lockers, actor `k` toggles every `k`-th locker,
//! and at the end exactly the perfect squares stand open.
//!
//! [`LockerMachine`] is the synchronous state machine; [`LockerSimulator`] drives
//! it one touch at a time on a tokio runtime so every touch can be animated.

use shared::{
    error::{ErrorCode, InputError},
    input::parse_integer,
};

mod machine;
mod simulator;
pub mod speed;

pub use machine::{LockerMachine, Pace, Step};
pub use simulator::LockerSimulator;

pub const MAX_LOCKERS: usize = 10_000;

/// Reads the locker count from a text control.
pub fn read_count(raw: &str) -> Result<usize, InputError> {
    let message = format!("Error: enter a locker count between 1 and {MAX_LOCKERS}.");
    let count = parse_integer(raw).map_err(|err| err.with_message(message.clone()))?;
    match usize::try_from(count) {
        Ok(count) if (1..=MAX_LOCKERS).contains(&count) => Ok(count),
        _ => Err(InputError::new(ErrorCode::OutOfDomain, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_must_be_positive_and_bounded() {
        assert_eq!(read_count("25"), Ok(25));
        assert_eq!(read_count(" 1 "), Ok(1));
        assert_eq!(read_count("0").map_err(|e| e.code), Err(ErrorCode::OutOfDomain));
        assert_eq!(read_count("-3").map_err(|e| e.code), Err(ErrorCode::OutOfDomain));
        assert_eq!(read_count("10001").map_err(|e| e.code), Err(ErrorCode::OutOfDomain));
        assert_eq!(read_count("many").map_err(|e| e.code), Err(ErrorCode::NotNumeric));
    }
}
