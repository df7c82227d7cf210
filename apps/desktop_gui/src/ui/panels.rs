//! The four visualizer panels.

use algorithms::present::Presentation;
use egui::{Color32, RichText};
use lockers::speed::{SLIDER_MAX, SLIDER_MIN};
use shared::{domain::Radix, protocol::CellState};

use super::app::NumvizApp;
use crate::{backend_bridge::commands::LockerCommand, controller::orchestration::start_pause_label};

const CLOSED_FILL: Color32 = Color32::from_rgb(90, 96, 110);
const OPEN_FILL: Color32 = Color32::from_rgb(67, 181, 129);
const HIGHLIGHT_FILL: Color32 = Color32::from_rgb(250, 200, 60);
const CUP_OFF: Color32 = Color32::from_rgb(60, 60, 60);

fn section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).strong().size(16.0));
        ui.add_space(4.0);
        add_contents(ui);
    });
}

fn presentation(ui: &mut egui::Ui, shown: &Presentation) {
    ui.label(RichText::new(&shown.result).monospace().size(18.0));
    for (i, step) in shown.steps.iter().enumerate() {
        let line = if shown.ordered {
            format!("{}. {step}", i + 1)
        } else {
            format!("• {step}")
        };
        ui.label(RichText::new(line).monospace());
    }
    if let Some(note) = &shown.note {
        ui.label(RichText::new(note).italics().weak());
    }
}

pub fn conversion(app: &mut NumvizApp, ui: &mut egui::Ui) {
    section(ui, "Base conversion (successive division)", |ui| {
        ui.horizontal(|ui| {
            ui.label("Decimal number:");
            ui.text_edit_singleline(&mut app.conversion.input);
            if ui.button("To binary").clicked() {
                app.convert(Radix::Binary);
            }
            if ui.button("To hexadecimal").clicked() {
                app.convert(Radix::Hexadecimal);
            }
        });
        if let Some(shown) = &app.conversion.shown {
            presentation(ui, shown);
        }
    });
}

pub fn factorization(app: &mut NumvizApp, ui: &mut egui::Ui) {
    section(ui, "Prime factorization (trial division)", |ui| {
        ui.horizontal(|ui| {
            ui.label("Number:");
            ui.text_edit_singleline(&mut app.factor.input);
            if ui.button("Factorize").clicked() {
                app.factorize();
            }
        });
        if let Some(shown) = &app.factor.shown {
            presentation(ui, shown);
        }
    });
}

pub fn bottles(app: &mut NumvizApp, ui: &mut egui::Ui) {
    section(ui, "Bottles and cups (4-bit binary)", |ui| {
        ui.horizontal(|ui| {
            ui.label("Bottle (0-15):");
            let edited = ui.text_edit_singleline(&mut app.bottle.input).changed();
            if ui.button("Show").clicked() || edited {
                app.refresh_bottle();
            }
        });
        ui.label(RichText::new(&app.bottle.shown.result).monospace().size(18.0));
        ui.horizontal(|ui| {
            for (i, on) in app.bottle.bits.iter().enumerate() {
                let label = format!(" Cup {} ", app.bottle.bits.len() - 1 - i);
                let fill = if *on { OPEN_FILL } else { CUP_OFF };
                ui.label(
                    RichText::new(label)
                        .monospace()
                        .color(Color32::WHITE)
                        .background_color(fill),
                );
            }
        });
    });
}

pub fn lockers(app: &mut NumvizApp, ui: &mut egui::Ui) {
    let snapshot = app.simulator().snapshot();
    let mut command = None;

    section(ui, "Lockers", |ui| {
        ui.horizontal(|ui| {
            ui.label("Lockers:");
            ui.add(egui::TextEdit::singleline(&mut app.lockers.count_input).desired_width(60.0));
            if ui.button(start_pause_label(snapshot.phase)).clicked() {
                command = Some(LockerCommand::StartPause);
            }
            if ui.button("Reset").clicked() {
                command = Some(LockerCommand::Reset);
            }
        });
        let speed = ui.add(
            egui::Slider::new(&mut app.lockers.slider, SLIDER_MIN..=SLIDER_MAX)
                .text("speed")
                .show_value(false),
        );
        if speed.changed() {
            command = Some(LockerCommand::SetSpeed(app.lockers.slider));
        }

        ui.label(RichText::new(snapshot.status_line()).strong());
        if let Some(error) = &app.lockers.error {
            ui.colored_label(Color32::LIGHT_RED, error.as_str());
        }

        ui.horizontal_wrapped(|ui| {
            let width = snapshot.lockers.len().to_string().len();
            for locker in 1..=snapshot.lockers.len() {
                let (fill, text) = match snapshot.cell(locker) {
                    CellState::Closed => (CLOSED_FILL, Color32::WHITE),
                    CellState::Open => (OPEN_FILL, Color32::BLACK),
                    CellState::Highlighted => (HIGHLIGHT_FILL, Color32::BLACK),
                };
                ui.label(
                    RichText::new(format!(" {locker:>width$} "))
                        .monospace()
                        .color(text)
                        .background_color(fill),
                );
            }
        });

        for line in &app.lockers.log {
            ui.label(RichText::new(line).small().weak());
        }
    });

    if let Some(cmd) = command {
        app.locker_command(cmd);
    }
}
