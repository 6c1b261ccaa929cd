/*
 * Renderer Module
 *
 * This module draws the flock. Every boid is a small white 1x4 rectangle
 * hung from its position and turned by its heading, placed through the
 * centroid-following camera.
 * Rendering only reads the flock.
 */

use nannou::prelude::*;
use tracing::warn;

use crate::app::Model;
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();

    for boid in &model.flock {
        let corners = boid.outline();
        draw.polygon()
            .color(WHITE)
            .points(corners.iter().map(|corner| model.camera.world_to_screen(*corner, window_rect)));
    }

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.flock.len());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(?err, "failed to render flock");
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!(?err, "failed to render control panel");
    }
}
