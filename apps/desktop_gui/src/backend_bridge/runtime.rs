//! Runtime bridge: the tokio runtime hosting simulator steps and the task that
//! forwards simulation events to the UI queue.

use crossbeam_channel::{Sender, TrySendError};
use lockers::LockerSimulator;
use tokio::{runtime::Runtime, sync::broadcast::error::RecvError};

use crate::controller::events::UiEvent;

pub fn build_runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("numviz-sim")
        .enable_all()
        .build()
}

pub fn launch(
    runtime: &Runtime,
    simulator: &LockerSimulator,
    ui_tx: Sender<UiEvent>,
    ctx: egui::Context,
) {
    let mut events = simulator.subscribe();
    runtime.spawn(async move {
        loop {
            let ui_event = match events.recv().await {
                Ok(event) => UiEvent::Simulation(event),
                Err(RecvError::Lagged(skipped)) => UiEvent::Lagged(skipped),
                Err(RecvError::Closed) => break,
            };
            match ui_tx.try_send(ui_event) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    tracing::debug!("ui event queue is full; dropping simulation event");
                }
                Err(TrySendError::Disconnected(_)) => break,
            }
            ctx.request_repaint();
        }
        tracing::debug!("simulation event bridge stopped");
    });
}
