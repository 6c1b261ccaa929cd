/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for the steering constants and the
 * driver, and draws the debug overlay.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// What the control panel asked for this frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiResponse {
    pub reset_flock: bool,
    pub steering_changed: bool,
}

// Update the UI and report which actions the model has to take
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> UiResponse {
    let mut response = UiResponse::default();
    let steering_before = params.steering;

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range()).text("Number of Boids"));

                if ui.button("Reset Flock").clicked() {
                    response.reset_flock = true;
                }

                ui.add(egui::Slider::new(&mut params.updates_per_frame, SimulationParams::get_updates_per_frame_range()).text("Updates per Frame"));
            });

            ui.collapsing("Steering", |ui| {
                let steering = &mut params.steering;
                ui.add(egui::Slider::new(&mut steering.separation_force, SimulationParams::get_force_range()).text("Separation (deg/s)"));
                ui.add(egui::Slider::new(&mut steering.cohesion_force, SimulationParams::get_force_range()).text("Cohesion (deg/s)"));
                ui.add(egui::Slider::new(&mut steering.alignment_force, SimulationParams::get_force_range()).text("Alignment (deg/s)"));
                ui.add(egui::Slider::new(&mut steering.separation_radius, SimulationParams::get_radius_range()).text("Separation Radius"));
                ui.add(egui::Slider::new(&mut steering.movement_speed, SimulationParams::get_speed_range()).text("Movement Speed"));
            });

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Total ticks: {}", debug_info.total_ticks));
            if debug_info.rejected_ticks > 0 {
                ui.label(format!("Rejected ticks: {}", debug_info.rejected_ticks));
            }

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    response.steering_changed = params.steering != steering_before;
    response
}

// Draw debug information in the top-left corner of the window
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    boid_count: usize,
) {
    let lines = debug_info.lines(boid_count);

    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * lines.len() as f32 + margin;

    draw.rect()
        .x_y(window_rect.left() + panel_width / 2.0, window_rect.top() - panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // nannou centres text on its position, so shift right by roughly half a line
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
