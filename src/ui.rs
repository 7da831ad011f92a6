//! Control panel and hover tooltip.
//!
//! The panel writes straight into the shared [`SpeedConfig`] and pause flag;
//! nothing is torn down or rebuilt on a change.

use glam::Vec2;

use crate::orbit::SpeedConfig;
use crate::planet::{PlanetDescriptor, MAX_SPEED, MIN_SPEED, SPEED_STEP};

/// Offset of the tooltip from the pointer, in logical points.
const TOOLTIP_MARGIN: f32 = 14.0;

/// Draw the control panel window.
pub fn control_panel(
    ctx: &egui::Context,
    planets: &'static [PlanetDescriptor],
    speeds: &mut SpeedConfig,
    paused: &mut bool,
    fps: f32,
) {
    egui::Window::new("Orbital Controls")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Speeds");
            ui.separator();

            for planet in planets {
                let mut speed = speeds.speed(planet.name);
                ui.horizontal(|ui| {
                    ui.label(planet.name);
                    let response = ui.add(
                        egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED)
                            .step_by(SPEED_STEP as f64)
                            .fixed_decimals(3),
                    );
                    if response.changed() {
                        speeds.set_speed(planet.name, speed);
                    }
                });
            }

            ui.separator();

            ui.horizontal(|ui| {
                let label = if *paused { "Resume" } else { "Pause" };
                if ui.button(label).clicked() {
                    *paused = !*paused;
                }
                if ui.button("Reset speeds").clicked() {
                    speeds.reset(planets);
                }
            });

            ui.separator();
            ui.label(format!("{fps:.0} fps"));
            ui.label("Drag to rotate, scroll to zoom");
            ui.label("Space toggles pause");
        });
}

/// Draw the floating tooltip with a planet name next to the pointer.
///
/// `cursor` is in physical pixels; egui positions are logical points.
pub fn planet_tooltip(ctx: &egui::Context, name: &str, cursor: Vec2) {
    let scale = ctx.pixels_per_point();
    let pos = egui::pos2(
        cursor.x / scale + TOOLTIP_MARGIN,
        cursor.y / scale + TOOLTIP_MARGIN,
    );

    egui::Area::new(egui::Id::new("planet-tooltip"))
        .order(egui::Order::Tooltip)
        .fixed_pos(pos)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(&ctx.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(name).strong());
            });
        });
}
