use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockerPhase {
    #[default]
    Idle,
    Running,
    Paused,
    Complete,
}

/// Where the simulation will continue from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "at", rename_all = "snake_case")]
pub enum Cursor {
    /// The actor has not been announced yet.
    Actor { actor: usize },
    /// The actor is mid-pass; `locker` is the next one it touches.
    Locker { actor: usize, locker: usize },
}

impl Cursor {
    pub fn actor(&self) -> usize {
        match *self {
            Cursor::Actor { actor } | Cursor::Locker { actor, .. } => actor,
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::Actor { actor: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Closed,
    Open,
    Highlighted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SimulationEvent {
    GridReset {
        lockers: usize,
    },
    Started {
        lockers: usize,
    },
    ActorStarted {
        actor: usize,
    },
    LockerToggled {
        actor: usize,
        locker: usize,
        open: bool,
    },
    HighlightCleared {
        locker: usize,
    },
    ActorFinished {
        actor: usize,
    },
    Paused {
        cursor: Cursor,
    },
    Resumed {
        cursor: Cursor,
    },
    Completed {
        open_lockers: Vec<usize>,
    },
}

/// Point-in-time view of a simulator, enough to draw the grid and status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockerSnapshot {
    pub phase: LockerPhase,
    pub cursor: Cursor,
    /// Index `i - 1` holds locker `i`; `true` is open.
    pub lockers: Vec<bool>,
    pub highlighted: BTreeSet<usize>,
    pub delay_ms: u64,
}

impl LockerSnapshot {
    pub fn cell(&self, locker: usize) -> CellState {
        if self.highlighted.contains(&locker) {
            CellState::Highlighted
        } else if locker
            .checked_sub(1)
            .and_then(|index| self.lockers.get(index))
            .copied()
            .unwrap_or(false)
        {
            CellState::Open
        } else {
            CellState::Closed
        }
    }

    pub fn open_count(&self) -> usize {
        self.lockers.iter().filter(|open| **open).count()
    }

    pub fn status_line(&self) -> String {
        match self.phase {
            LockerPhase::Idle => "Ready to start.".to_string(),
            LockerPhase::Running => format!("Actor {} passing...", self.cursor.actor()),
            LockerPhase::Paused => format!("Actor {} passing... (paused)", self.cursor.actor()),
            LockerPhase::Complete => {
                format!("Simulation complete! Open lockers: {}", self.open_count())
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
