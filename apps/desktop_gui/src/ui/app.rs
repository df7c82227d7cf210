use std::{collections::VecDeque, time::Duration};

use algorithms::present::{self, Presentation};
use crossbeam_channel::Receiver;
use lockers::LockerSimulator;
use shared::{
    config::Settings,
    domain::{Radix, BOTTLE_BITS},
    protocol::LockerPhase,
};
use tokio::runtime::Runtime;

use crate::{
    backend_bridge::commands::LockerCommand,
    controller::{events::UiEvent, orchestration::dispatch_locker_command},
};

const LOG_LINES: usize = 12;

#[derive(Default)]
pub struct ConversionPanel {
    pub input: String,
    pub shown: Option<Presentation>,
}

#[derive(Default)]
pub struct FactorPanel {
    pub input: String,
    pub shown: Option<Presentation>,
}

pub struct BottlePanel {
    pub input: String,
    pub shown: Presentation,
    pub bits: [bool; BOTTLE_BITS],
}

pub struct LockerPanel {
    pub count_input: String,
    pub slider: u32,
    pub error: Option<String>,
    pub log: VecDeque<String>,
}

pub struct NumvizApp {
    // Dropping the runtime stops every pending simulator step.
    _runtime: Runtime,
    simulator: LockerSimulator,
    ui_rx: Receiver<UiEvent>,
    pub conversion: ConversionPanel,
    pub factor: FactorPanel,
    pub bottle: BottlePanel,
    pub lockers: LockerPanel,
}

impl NumvizApp {
    pub fn new(
        runtime: Runtime,
        simulator: LockerSimulator,
        ui_rx: Receiver<UiEvent>,
        settings: &Settings,
    ) -> Self {
        let mut app = Self {
            _runtime: runtime,
            simulator,
            ui_rx,
            conversion: ConversionPanel::default(),
            factor: FactorPanel::default(),
            bottle: BottlePanel {
                input: "0".into(),
                shown: Presentation::default(),
                bits: [false; BOTTLE_BITS],
            },
            lockers: LockerPanel {
                count_input: settings.lockers.to_string(),
                slider: settings.speed,
                error: None,
                log: VecDeque::with_capacity(LOG_LINES),
            },
        };
        app.refresh_bottle();
        app
    }

    pub fn convert(&mut self, radix: Radix) {
        let shown = match algorithms::convert_input(&self.conversion.input, radix) {
            Ok(conversion) => present::conversion(&conversion),
            Err(err) => present::error(&err),
        };
        self.conversion.shown = Some(shown);
    }

    pub fn factorize(&mut self) {
        let shown = match algorithms::factorize_input(&self.factor.input) {
            Ok(factorization) => present::factorization(&factorization),
            Err(err) => present::error(&err),
        };
        self.factor.shown = Some(shown);
    }

    /// Recomputes the cups; an out-of-range number is written back clamped.
    pub fn refresh_bottle(&mut self) {
        let reading = algorithms::read_bottle(&self.bottle.input);
        if let Some(corrected) = reading.corrected_input {
            self.bottle.input = corrected;
        }
        self.bottle.bits = reading.code.bits;
        self.bottle.shown = present::bottle(&reading.code);
    }

    pub fn locker_command(&mut self, cmd: LockerCommand) {
        self.lockers.error =
            dispatch_locker_command(&self.simulator, cmd, &self.lockers.count_input).err();
    }

    pub fn simulator(&self) -> &LockerSimulator {
        &self.simulator
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            if let Some(line) = event.log_line() {
                if self.lockers.log.len() == LOG_LINES {
                    self.lockers.log.pop_front();
                }
                self.lockers.log.push_back(line);
            }
        }
    }
}

impl eframe::App for NumvizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.heading("Number algorithm visualizers");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                super::panels::conversion(self, ui);
                ui.add_space(8.0);
                super::panels::factorization(self, ui);
                ui.add_space(8.0);
                super::panels::bottles(self, ui);
                ui.add_space(8.0);
                super::panels::lockers(self, ui);
            });
        });

        if self.simulator.phase() == LockerPhase::Running {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
