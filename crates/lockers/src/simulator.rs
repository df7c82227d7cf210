use std::{
    collections::BTreeSet,
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc, Weak,
    },
    time::Duration,
};

use parking_lot::Mutex;
use shared::protocol::{LockerPhase, LockerSnapshot, SimulationEvent};
use tokio::{
    runtime::Handle,
    sync::{broadcast, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{
    machine::{LockerMachine, Pace, Step},
    speed,
};

const EVENT_CAPACITY: usize = 1024;

/// Animated locker simulation.
///
/// Every touch is its own scheduled task and at most one such task is pending
/// at a time. Pausing cancels it and leaves the cursor where it was; resuming
/// continues from that exact locker. Cloning gives another handle to the same
/// simulation.
#[derive(Clone)]
pub struct LockerSimulator {
    inner: Arc<Inner>,
}

struct Inner {
    runtime: Handle,
    state: Mutex<SimulatorState>,
    slider: AtomicU32,
    events: broadcast::Sender<SimulationEvent>,
    phase: watch::Sender<LockerPhase>,
}

struct SimulatorState {
    machine: LockerMachine,
    highlighted: BTreeSet<usize>,
    pending: Option<PendingStep>,
    next_ticket: u64,
    /// Bumped whenever the grid is replaced so stale highlight clears are dropped.
    generation: u64,
}

struct PendingStep {
    ticket: u64,
    task: JoinHandle<()>,
}

impl SimulatorState {
    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
        }
    }
}

impl LockerSimulator {
    /// An idle simulator showing `lockers` closed lockers. Steps are spawned on
    /// `runtime`.
    pub fn new(lockers: usize, slider: u32, runtime: Handle) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let (phase, _) = watch::channel(LockerPhase::Idle);
        Self {
            inner: Arc::new(Inner {
                runtime,
                state: Mutex::new(SimulatorState {
                    machine: LockerMachine::new(lockers),
                    highlighted: BTreeSet::new(),
                    pending: None,
                    next_ticket: 0,
                    generation: 0,
                }),
                slider: AtomicU32::new(speed::clamp_slider(slider)),
                events,
                phase,
            }),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SimulationEvent> {
        self.inner.events.subscribe()
    }

    pub fn watch_phase(&self) -> watch::Receiver<LockerPhase> {
        self.inner.phase.subscribe()
    }

    pub fn phase(&self) -> LockerPhase {
        self.inner.state.lock().machine.phase()
    }

    pub fn snapshot(&self) -> LockerSnapshot {
        let state = self.inner.state.lock();
        LockerSnapshot {
            phase: state.machine.phase(),
            cursor: state.machine.cursor(),
            lockers: state.machine.lockers().to_vec(),
            highlighted: state.highlighted.clone(),
            delay_ms: self.delay().as_millis() as u64,
        }
    }

    /// Changes the speed. Only steps scheduled from now on use the new delay.
    pub fn set_speed(&self, slider: u32) {
        let slider = speed::clamp_slider(slider);
        self.inner.slider.store(slider, Ordering::Relaxed);
        debug!(slider, delay_ms = %speed::step_delay(slider).as_millis(), "speed changed");
    }

    pub fn delay(&self) -> Duration {
        self.inner.step_delay()
    }

    /// Starts a fresh run over `lockers` closed lockers. The first actor is
    /// announced and makes its first touch right away.
    pub fn start(&self, lockers: usize) {
        let mut state = self.inner.state.lock();
        state.cancel_pending();
        state.generation += 1;
        state.highlighted.clear();
        state.machine.start(lockers);
        info!(lockers, "locker simulation started");
        self.inner.publish(SimulationEvent::Started { lockers });
        self.inner.set_phase(LockerPhase::Running);
        self.inner.advance(&mut state);
    }

    /// Cancels the pending step. Does nothing unless running.
    pub fn pause(&self) {
        let mut state = self.inner.state.lock();
        if !state.machine.pause() {
            debug!(phase = ?state.machine.phase(), "pause ignored");
            return;
        }
        state.cancel_pending();
        let cursor = state.machine.cursor();
        info!(?cursor, "locker simulation paused");
        self.inner.publish(SimulationEvent::Paused { cursor });
        self.inner.set_phase(LockerPhase::Paused);
    }

    /// Continues a paused run from its cursor. Without a paused run this starts
    /// a fresh one over `lockers`; a running simulation is left alone.
    pub fn resume(&self, lockers: usize) {
        let mut state = self.inner.state.lock();
        match state.machine.phase() {
            LockerPhase::Running => {}
            LockerPhase::Paused => {
                state.machine.resume();
                let cursor = state.machine.cursor();
                info!(?cursor, "locker simulation resumed");
                self.inner.publish(SimulationEvent::Resumed { cursor });
                self.inner.set_phase(LockerPhase::Running);
                self.inner.advance(&mut state);
            }
            LockerPhase::Idle | LockerPhase::Complete => {
                warn!(lockers, "resume without a paused run; starting fresh");
                drop(state);
                self.start(lockers);
            }
        }
    }

    /// The single start/pause button: pauses a running simulation, otherwise
    /// resumes or starts one.
    pub fn toggle(&self, lockers: usize) {
        match self.phase() {
            LockerPhase::Running => self.pause(),
            LockerPhase::Paused => self.resume(lockers),
            LockerPhase::Idle | LockerPhase::Complete => self.start(lockers),
        }
    }

    /// Cancels everything and shows `lockers` closed lockers, ready to start.
    pub fn reset(&self, lockers: usize) {
        let mut state = self.inner.state.lock();
        state.cancel_pending();
        state.generation += 1;
        state.highlighted.clear();
        state.machine.reset(lockers);
        info!(lockers, "locker simulation reset");
        self.inner.publish(SimulationEvent::GridReset { lockers });
        self.inner.set_phase(LockerPhase::Idle);
    }

    /// Resolves once the simulation reaches `phase`.
    pub async fn wait_for(&self, phase: LockerPhase) {
        let mut rx = self.watch_phase();
        // the sender lives in `inner`, which `self` keeps alive
        let _ = rx.wait_for(|current| *current == phase).await;
    }
}

impl Inner {
    fn step_delay(&self) -> Duration {
        speed::step_delay(self.slider.load(Ordering::Relaxed))
    }

    fn publish(&self, event: SimulationEvent) {
        // no subscribers is fine
        let _ = self.events.send(event);
    }

    fn set_phase(&self, phase: LockerPhase) {
        self.phase.send_replace(phase);
    }

    /// Runs steps until one needs a delay, then schedules the next one.
    fn advance(self: &Arc<Self>, state: &mut SimulatorState) {
        loop {
            let step = state.machine.step();
            let pace = step.pace();
            match step {
                Step::Announced { actor } => {
                    debug!(actor, "actor announced");
                    self.publish(SimulationEvent::ActorStarted { actor });
                }
                Step::Toggled {
                    actor,
                    locker,
                    open,
                } => {
                    debug!(actor, locker, open, "locker toggled");
                    state.highlighted.insert(locker);
                    self.clear_highlight_later(locker, state.generation);
                    self.publish(SimulationEvent::LockerToggled {
                        actor,
                        locker,
                        open,
                    });
                }
                Step::ActorFinished { actor } => {
                    debug!(actor, "actor finished");
                    self.publish(SimulationEvent::ActorFinished { actor });
                }
                Step::Completed { open_lockers } => {
                    info!(open = open_lockers.len(), "locker simulation complete");
                    self.publish(SimulationEvent::Completed { open_lockers });
                    self.set_phase(LockerPhase::Complete);
                }
                Step::Halted => {}
            }

            match pace {
                Pace::Immediate => continue,
                Pace::Step => self.schedule(state, self.step_delay()),
                Pace::Settle => self.schedule(state, speed::settle_delay(self.step_delay())),
                Pace::Stop => {}
            }
            return;
        }
    }

    fn schedule(self: &Arc<Self>, state: &mut SimulatorState, delay: Duration) {
        let ticket = state.next_ticket;
        state.next_ticket += 1;
        let weak = Arc::downgrade(self);
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.run_pending(ticket);
            }
        });
        state.cancel_pending();
        state.pending = Some(PendingStep { ticket, task });
    }

    /// Entry point of a scheduled step. A step that woke up after being
    /// superseded by a pause, reset or restart finds another ticket and stops.
    fn run_pending(self: &Arc<Self>, ticket: u64) {
        let mut state = self.state.lock();
        match &state.pending {
            Some(pending) if pending.ticket == ticket => {}
            _ => return,
        }
        state.pending = None;
        self.advance(&mut state);
    }

    /// Highlight clears are not cancelled by pause; they only touch presentation.
    fn clear_highlight_later(self: &Arc<Self>, locker: usize, generation: u64) {
        let delay = speed::highlight_delay(self.step_delay());
        let weak: Weak<Inner> = Arc::downgrade(self);
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut state = inner.state.lock();
            if state.generation == generation && state.highlighted.remove(&locker) {
                inner.publish(SimulationEvent::HighlightCleared { locker });
            }
        });
    }
}
