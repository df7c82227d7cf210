use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use lockers::LockerSimulator;
use shared::config::load_settings_from;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use controller::events::UiEvent;
use ui::NumvizApp;

#[derive(Parser, Debug)]
#[command(name = "numviz-gui", about = "Desktop visualizers for elementary number algorithms")]
struct Args {
    /// Settings file; defaults to ./numviz.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings =
        load_settings_from(args.config.as_deref()).context("failed to load settings")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let runtime = backend_bridge::runtime::build_runtime().context("failed to start runtime")?;
    let simulator =
        LockerSimulator::new(settings.lockers, settings.speed, runtime.handle().clone());
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("numviz")
            .with_inner_size([960.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "numviz",
        options,
        Box::new(move |cc| {
            backend_bridge::runtime::launch(&runtime, &simulator, ui_tx, cc.egui_ctx.clone());
            Ok(Box::new(NumvizApp::new(runtime, simulator, ui_rx, &settings)))
        }),
    )
    .map_err(|err| anyhow!("desktop ui failed: {err}"))
}
