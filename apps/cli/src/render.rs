//! Terminal rendering of the locker grid and simulation events.

use shared::protocol::{CellState, LockerSnapshot, SimulationEvent};

const CELLS_PER_ROW: usize = 10;

/// Closed lockers print as ` 7 `, open ones as `[7]`, highlighted ones as `<7>`.
pub fn grid(snapshot: &LockerSnapshot) -> String {
    let width = snapshot.lockers.len().to_string().len();
    let cells: Vec<String> = (1..=snapshot.lockers.len())
        .map(|locker| {
            let (open, close) = match snapshot.cell(locker) {
                CellState::Closed => (' ', ' '),
                CellState::Open => ('[', ']'),
                CellState::Highlighted => ('<', '>'),
            };
            format!("{open}{locker:>width$}{close}")
        })
        .collect();

    cells
        .chunks(CELLS_PER_ROW)
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per event worth narrating; highlight clears are silent.
pub fn event_line(event: &SimulationEvent) -> Option<String> {
    let line = match event {
        SimulationEvent::GridReset { lockers } => format!("Grid reset to {lockers} closed lockers."),
        SimulationEvent::Started { lockers } => format!("Starting with {lockers} lockers..."),
        SimulationEvent::ActorStarted { actor } => format!("Actor {actor} passing..."),
        SimulationEvent::LockerToggled {
            actor,
            locker,
            open,
        } => format!(
            "  actor {actor} {} locker {locker}",
            if *open { "opens" } else { "closes" }
        ),
        SimulationEvent::HighlightCleared { .. } => return None,
        SimulationEvent::ActorFinished { actor } => format!("Actor {actor} done."),
        SimulationEvent::Paused { cursor } => format!("Actor {} passing... (paused)", cursor.actor()),
        SimulationEvent::Resumed { cursor } => format!("Resuming actor {}...", cursor.actor()),
        SimulationEvent::Completed { open_lockers } => format!(
            "Simulation complete! Open lockers: {} {:?}",
            open_lockers.len(),
            open_lockers
        ),
    };
    Some(line)
}
