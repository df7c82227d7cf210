//! Dispatch of locker panel actions to the simulator.

use lockers::{read_count, LockerSimulator};
use shared::protocol::LockerPhase;

use crate::backend_bridge::commands::LockerCommand;

/// Runs `cmd`. The locker count is only read when a fresh grid is needed; an
/// unreadable count leaves the simulation untouched and reports why.
pub fn dispatch_locker_command(
    simulator: &LockerSimulator,
    cmd: LockerCommand,
    count_input: &str,
) -> Result<(), String> {
    let cmd_name = match &cmd {
        LockerCommand::StartPause => "start_pause",
        LockerCommand::Reset => "reset",
        LockerCommand::SetSpeed(_) => "set_speed",
    };
    tracing::debug!(command = cmd_name, "locker command");

    match cmd {
        LockerCommand::StartPause => match simulator.phase() {
            LockerPhase::Running => simulator.pause(),
            LockerPhase::Paused => simulator.resume(simulator.snapshot().lockers.len()),
            LockerPhase::Idle | LockerPhase::Complete => {
                let count = read_count(count_input).map_err(|err| err.message)?;
                simulator.start(count);
            }
        },
        LockerCommand::Reset => {
            let count = read_count(count_input).map_err(|err| err.message)?;
            simulator.reset(count);
        }
        LockerCommand::SetSpeed(slider) => simulator.set_speed(slider),
    }
    Ok(())
}

/// Label of the start/pause button for the current phase.
pub fn start_pause_label(phase: LockerPhase) -> &'static str {
    match phase {
        LockerPhase::Running => "Pause",
        LockerPhase::Paused => "Resume",
        LockerPhase::Idle | LockerPhase::Complete => "Start",
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn simulator(runtime: &tokio::runtime::Runtime) -> LockerSimulator {
        LockerSimulator::new(5, 1000, runtime.handle().clone())
    }

    #[test]
    fn invalid_count_is_reported_and_nothing_starts() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("runtime");
        let simulator = simulator(&runtime);

        let err = dispatch_locker_command(&simulator, LockerCommand::StartPause, "zero")
            .expect_err("rejected");
        assert!(err.starts_with("Error:"));
        assert_eq!(simulator.phase(), LockerPhase::Idle);
    }

    #[test]
    fn start_pause_cycles_through_the_phases() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("runtime");
        let simulator = simulator(&runtime);

        dispatch_locker_command(&simulator, LockerCommand::StartPause, "8").expect("start");
        assert_eq!(simulator.phase(), LockerPhase::Running);
        assert_eq!(simulator.snapshot().lockers.len(), 8);
        assert_eq!(start_pause_label(simulator.phase()), "Pause");

        // resuming ignores a count typed in the meantime
        dispatch_locker_command(&simulator, LockerCommand::StartPause, "8").expect("pause");
        dispatch_locker_command(&simulator, LockerCommand::StartPause, "bad").expect("resume");
        assert_eq!(simulator.phase(), LockerPhase::Running);
        assert_eq!(simulator.snapshot().lockers.len(), 8);

        dispatch_locker_command(&simulator, LockerCommand::SetSpeed(50), "").expect("speed");
        assert_eq!(simulator.delay(), Duration::from_millis(1000));

        dispatch_locker_command(&simulator, LockerCommand::Reset, "3").expect("reset");
        assert_eq!(simulator.phase(), LockerPhase::Idle);
        assert_eq!(start_pause_label(simulator.phase()), "Start");
    }
}
