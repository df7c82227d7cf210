//! Actions the locker panel sends to the simulator.

pub enum LockerCommand {
    /// The start/pause/resume button.
    StartPause,
    Reset,
    SetSpeed(u32),
}
