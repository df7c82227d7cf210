use std::{path::PathBuf, process::ExitCode, time::Duration};

use algorithms::present::{self, Presentation};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lockers::LockerSimulator;
use serde_json::json;
use shared::{
    config::{load_settings_from, Settings},
    domain::Radix,
    error::InputError,
    protocol::{LockerPhase, SimulationEvent},
};
use tokio::{
    runtime::Handle,
    sync::broadcast::{self, error::RecvError},
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(name = "numviz", about = "Step-by-step visualizers for elementary number algorithms")]
struct Cli {
    /// Settings file; defaults to ./numviz.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results and traces as JSON.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a decimal number by successive division.
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long, default_value_t = 2)]
        radix: u32,
    },
    /// Prime factorization by trial division.
    Factorize {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Show which of the four cups light up for a bottle number (0-15).
    Bottles {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Animate the locker problem.
    Lockers {
        /// Number of lockers (1-10000); defaults to the configured count.
        #[arg(long, allow_hyphen_values = true)]
        count: Option<String>,
        /// Speed slider position (50-1000); larger is faster.
        #[arg(long)]
        speed: Option<u32>,
        /// Pause after this many touches, then resume.
        #[arg(long)]
        pause_after: Option<usize>,
        #[arg(long, default_value_t = 1000)]
        pause_for_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let settings = load_settings_from(cli.config.as_deref()).context("failed to load settings")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Convert { value, radix } => {
            let outcome = Radix::try_from(radix)
                .and_then(|radix| algorithms::convert_input(&value, radix));
            show(
                outcome.as_ref().map(present::conversion),
                outcome.as_ref().ok(),
                cli.json,
            )
        }
        Command::Factorize { value } => {
            let outcome = algorithms::factorize_input(&value);
            show(
                outcome.as_ref().map(present::factorization),
                outcome.as_ref().ok(),
                cli.json,
            )
        }
        Command::Bottles { value } => {
            let reading = algorithms::read_bottle(&value);
            if let Some(corrected) = &reading.corrected_input {
                eprintln!("bottle number corrected to {corrected}");
            }
            show(Ok(present::bottle(&reading.code)), Some(&reading), cli.json)
        }
        Command::Lockers {
            count,
            speed,
            pause_after,
            pause_for_ms,
        } => {
            let count = match count.as_deref().map(lockers::read_count) {
                None => settings.lockers,
                Some(Ok(count)) => count,
                Some(Err(err)) => return show::<()>(Err(&err), None, cli.json),
            };
            run_lockers(
                &settings,
                count,
                speed,
                pause_after,
                Duration::from_millis(pause_for_ms),
                cli.json,
            )
            .await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Prints either the presentation or the input error; invalid input exits 1.
fn show<T: serde::Serialize>(
    shown: Result<Presentation, &InputError>,
    raw: Option<&T>,
    as_json: bool,
) -> Result<ExitCode> {
    match (shown, as_json) {
        (Ok(presentation), false) => {
            println!("{}", presentation.render());
            Ok(ExitCode::SUCCESS)
        }
        (Ok(presentation), true) => {
            let value = json!({ "presentation": presentation, "result": raw });
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        (Err(err), false) => {
            println!("{}", present::error(err).render());
            Ok(ExitCode::FAILURE)
        }
        (Err(err), true) => {
            println!("{}", serde_json::to_string_pretty(&json!({ "error": err }))?);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run_lockers(
    settings: &Settings,
    count: usize,
    speed: Option<u32>,
    pause_after: Option<usize>,
    pause_for: Duration,
    as_json: bool,
) -> Result<()> {
    let simulator = LockerSimulator::new(count, speed.unwrap_or(settings.speed), Handle::current());
    let mut events = simulator.subscribe();
    simulator.start(count);

    let mut touches = 0usize;
    while let Some(event) = next_event(&mut events, &simulator).await {
        if as_json {
            println!("{}", serde_json::to_string(&event)?);
        } else if let Some(line) = render::event_line(&event) {
            println!("{line}");
        }

        match event {
            SimulationEvent::LockerToggled { .. } => {
                touches += 1;
                if pause_after == Some(touches) {
                    simulator.pause();
                    tokio::time::sleep(pause_for).await;
                    simulator.resume(count);
                }
            }
            SimulationEvent::ActorFinished { .. } if !as_json => {
                println!("{}", render::grid(&simulator.snapshot()));
            }
            SimulationEvent::Completed { .. } => break,
            _ => {}
        }
    }

    if !as_json {
        let snapshot = simulator.snapshot();
        println!("{}", render::grid(&snapshot));
        println!("{}", snapshot.status_line());
    }
    Ok(())
}

/// Next event to narrate, or `None` once nothing more will arrive.
async fn next_event(
    events: &mut broadcast::Receiver<SimulationEvent>,
    simulator: &LockerSimulator,
) -> Option<SimulationEvent> {
    loop {
        match events.recv().await {
            Ok(event) => return Some(event),
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "event output fell behind the simulation");
                // the skipped events may include `Completed`
                if simulator.phase() == LockerPhase::Complete {
                    return None;
                }
            }
            Err(RecvError::Closed) => return None,
        }
    }
}
