//! Events delivered from the simulation runtime to the UI thread.

use shared::protocol::SimulationEvent;

pub enum UiEvent {
    Simulation(SimulationEvent),
    /// The forwarding task fell behind and dropped this many events.
    Lagged(u64),
}

impl UiEvent {
    /// Line for the activity log, if the event is worth one.
    pub fn log_line(&self) -> Option<String> {
        match self {
            UiEvent::Simulation(SimulationEvent::Started { lockers }) => {
                Some(format!("Starting... ({lockers} lockers)"))
            }
            UiEvent::Simulation(SimulationEvent::ActorStarted { actor }) => {
                Some(format!("Actor {actor} passing..."))
            }
            UiEvent::Simulation(SimulationEvent::Paused { cursor }) => {
                Some(format!("Paused at actor {}", cursor.actor()))
            }
            UiEvent::Simulation(SimulationEvent::Resumed { cursor }) => {
                Some(format!("Resumed at actor {}", cursor.actor()))
            }
            UiEvent::Simulation(SimulationEvent::GridReset { lockers }) => {
                Some(format!("Grid reset with {lockers} lockers"))
            }
            UiEvent::Simulation(SimulationEvent::Completed { open_lockers }) => Some(format!(
                "Complete! Open lockers: {} {:?}",
                open_lockers.len(),
                open_lockers
            )),
            UiEvent::Lagged(skipped) => Some(format!("(skipped {skipped} events)")),
            UiEvent::Simulation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::protocol::Cursor;

    use super::*;

    #[test]
    fn only_milestones_reach_the_log() {
        let toggled = UiEvent::Simulation(SimulationEvent::LockerToggled {
            actor: 1,
            locker: 1,
            open: true,
        });
        assert!(toggled.log_line().is_none());

        let paused = UiEvent::Simulation(SimulationEvent::Paused {
            cursor: Cursor::Locker { actor: 4, locker: 8 },
        });
        assert_eq!(paused.log_line().as_deref(), Some("Paused at actor 4"));
    }

    #[test]
    fn a_fresh_run_is_announced_as_starting() {
        let started = UiEvent::Simulation(SimulationEvent::Started { lockers: 12 });
        assert_eq!(
            started.log_line().as_deref(),
            Some("Starting... (12 lockers)")
        );
    }
}
