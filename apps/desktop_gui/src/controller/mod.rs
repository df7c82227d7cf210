//! Controller layer: UI events and dispatch of UI actions to the simulator.

pub mod events;
pub mod orchestration;
