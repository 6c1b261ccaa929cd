/*
 * Application Module
 *
 * This module defines the main application model and the per-frame loop.
 * Each frame it:
 * - reads the wall-clock time since the previous frame
 * - runs a fixed number of flock updates with that delta time
 * - recenters the camera on the flock's centroid
 *
 * Closing the window ends the nannou event loop.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{debug, info, warn};

use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::params::SimulationParams;
use crate::renderer;
use crate::ui;

// Frames longer than this are logged; the delta time is still applied unchanged
const LONG_FRAME_SECS: f32 = 0.25;

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = SimulationParams::default();

    let window_id = app
        .new_window()
        .title("boids")
        .size(params.window_width, params.window_height)
        .view(view)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to create window");

    let window = app.window(window_id).expect("Window was just created");
    let egui = Egui::from_window(&window);

    // Defaults are validated in main before the app starts
    let flock = Flock::new(&params).expect("Default simulation parameters are valid");

    let mut camera = Camera::new(params.view_size, params.view_zoom);
    camera.follow(flock.centroid());

    info!(
        boids = flock.len(),
        updates_per_frame = params.updates_per_frame,
        "Simulation ready"
    );

    Model {
        flock,
        params,
        egui,
        debug_info: DebugInfo::default(),
        camera,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let response = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if response.steering_changed {
        if let Err(err) = model.flock.set_steering(model.params.steering) {
            warn!(%err, "Ignoring steering change");
            model.params.steering = *model.flock.steering();
        }
    }

    if response.reset_flock {
        reset_flock(model);
    }

    if model.params.pause_simulation {
        model.debug_info.ticks_this_frame = 0;
    } else {
        let delta_time = update.since_last.as_secs_f32();
        run_ticks(model, delta_time);
    }

    let centroid = model.flock.centroid();
    model.camera.follow(centroid);
    model.debug_info.centroid = centroid;
}

// Run this frame's updates, stopping at the first rejected delta time
pub fn run_ticks(model: &mut Model, delta_time: f32) {
    if delta_time > LONG_FRAME_SECS {
        debug!(delta_time, "Long frame, applying full delta time");
    }

    let mut ticks = 0;
    for _ in 0..model.params.updates_per_frame {
        if let Err(err) = model.flock.update(delta_time) {
            warn!(%err, "Skipping flock update");
            model.debug_info.rejected_ticks += 1;
            break;
        }
        ticks += 1;
    }

    model.debug_info.ticks_this_frame = ticks;
    model.debug_info.total_ticks += ticks as u64;
}

// Rebuild the flock from the current parameters
pub fn reset_flock(model: &mut Model) {
    match Flock::new(&model.params) {
        Ok(flock) => {
            model.flock = flock;
            model.debug_info.total_ticks = 0;
        }
        Err(err) => warn!(%err, "Keeping the current flock"),
    }
}

pub fn view(app: &App, model: &Model, frame: Frame) {
    renderer::view(app, model, frame);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
