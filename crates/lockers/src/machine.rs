use shared::protocol::{Cursor, LockerPhase};

/// Outcome of a single [`LockerMachine::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// An actor begins its pass; its first touch follows immediately.
    Announced { actor: usize },
    Toggled {
        actor: usize,
        locker: usize,
        open: bool,
    },
    /// The actor ran past the last locker.
    ActorFinished { actor: usize },
    Completed { open_lockers: Vec<usize> },
    /// The machine is not running.
    Halted,
}

/// How long to wait before the step after this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Immediate,
    Step,
    Settle,
    Stop,
}

impl Step {
    pub fn pace(&self) -> Pace {
        match self {
            Step::Announced { .. } => Pace::Immediate,
            Step::Toggled { .. } => Pace::Step,
            Step::ActorFinished { .. } => Pace::Settle,
            Step::Completed { .. } | Step::Halted => Pace::Stop,
        }
    }
}

/// The whole simulation state: lockers, phase and cursor in one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockerMachine {
    lockers: Vec<bool>,
    phase: LockerPhase,
    cursor: Cursor,
}

impl LockerMachine {
    /// An idle machine showing `count` closed lockers.
    pub fn new(count: usize) -> Self {
        Self {
            lockers: vec![false; count],
            phase: LockerPhase::Idle,
            cursor: Cursor::default(),
        }
    }

    pub fn phase(&self) -> LockerPhase {
        self.phase
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.lockers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lockers.is_empty()
    }

    /// Index `i - 1` holds locker `i`.
    pub fn lockers(&self) -> &[bool] {
        &self.lockers
    }

    /// `locker` is 1-based; unknown lockers read as closed.
    pub fn is_open(&self, locker: usize) -> bool {
        locker
            .checked_sub(1)
            .and_then(|index| self.lockers.get(index))
            .copied()
            .unwrap_or(false)
    }

    pub fn open_lockers(&self) -> Vec<usize> {
        self.lockers
            .iter()
            .enumerate()
            .filter(|(_, open)| **open)
            .map(|(index, _)| index + 1)
            .collect()
    }

    /// Starts a fresh run over `count` closed lockers, whatever the current phase.
    pub fn start(&mut self, count: usize) {
        self.lockers = vec![false; count];
        self.cursor = Cursor::default();
        self.phase = LockerPhase::Running;
    }

    /// Freezes the cursor. Returns `false` when there was nothing running.
    pub fn pause(&mut self) -> bool {
        if self.phase != LockerPhase::Running {
            return false;
        }
        self.phase = LockerPhase::Paused;
        true
    }

    /// Continues a paused run from its cursor. Returns `false` unless paused.
    pub fn resume(&mut self) -> bool {
        if self.phase != LockerPhase::Paused {
            return false;
        }
        self.phase = LockerPhase::Running;
        true
    }

    /// Back to idle with `count` closed lockers.
    pub fn reset(&mut self, count: usize) {
        self.lockers = vec![false; count];
        self.cursor = Cursor::default();
        self.phase = LockerPhase::Idle;
    }

    pub fn step(&mut self) -> Step {
        if self.phase != LockerPhase::Running {
            return Step::Halted;
        }

        let count = self.lockers.len();
        match self.cursor {
            Cursor::Actor { actor } if actor > count => {
                self.phase = LockerPhase::Complete;
                Step::Completed {
                    open_lockers: self.open_lockers(),
                }
            }
            Cursor::Actor { actor } => {
                // an actor's first multiple is itself
                self.cursor = Cursor::Locker {
                    actor,
                    locker: actor,
                };
                Step::Announced { actor }
            }
            Cursor::Locker { actor, locker } if locker > count => {
                self.cursor = Cursor::Actor { actor: actor + 1 };
                Step::ActorFinished { actor }
            }
            Cursor::Locker { actor, locker } => {
                let slot = &mut self.lockers[locker - 1];
                *slot = !*slot;
                let open = *slot;
                self.cursor = Cursor::Locker {
                    actor,
                    locker: locker + actor,
                };
                Step::Toggled {
                    actor,
                    locker,
                    open,
                }
            }
        }
    }

    /// Steps without delays until the run completes or stops running.
    pub fn run_to_completion(&mut self) -> Vec<usize> {
        loop {
            match self.step() {
                Step::Completed { open_lockers } => return open_lockers,
                Step::Halted => return self.open_lockers(),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/machine_tests.rs"]
mod tests;
