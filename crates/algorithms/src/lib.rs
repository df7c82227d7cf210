//! The pure computations behind the base-conversion, factorization and bottles
//! visualizers, each returning its result together with the trace of steps taken.

pub mod base;
pub mod bottles;
pub mod factor;
pub mod present;

pub use base::{convert, convert_input};
pub use bottles::{bottle_code, clamp_bottle, read_bottle, BottleReading, Clamped};
pub use factor::{factorize, factorize_input};
