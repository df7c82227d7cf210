//! Bridge between the UI thread and the tokio runtime that drives the simulator.

pub mod commands;
pub mod runtime;
