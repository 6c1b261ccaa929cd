/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains the flock
 * layout, the steering constants and the driver settings. Defaults match the
 * classic setup: twenty boids in a row, three ticks per rendered frame. The
 * steering constants and the runtime toggles can be modified through the UI.
 */

use nannou::prelude::*;

use crate::error::FlockError;

// Constants of the three steering rules plus movement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringParams {
    // Neighbours closer than this push a boid away
    pub separation_radius: f32,
    // Maximum turn rates, in degrees per second
    pub separation_force: f32,
    pub cohesion_force: f32,
    pub alignment_force: f32,
    // Units per second
    pub movement_speed: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            separation_radius: 20.0,
            separation_force: 90.0,
            cohesion_force: 60.0,
            alignment_force: 50.0,
            movement_speed: 10.0,
        }
    }
}

impl SteeringParams {
    pub fn validate(&self) -> Result<(), FlockError> {
        let values = [
            (self.separation_radius, "separation_radius must be finite and non-negative"),
            (self.separation_force, "separation_force must be finite and non-negative"),
            (self.cohesion_force, "cohesion_force must be finite and non-negative"),
            (self.alignment_force, "alignment_force must be finite and non-negative"),
            (self.movement_speed, "movement_speed must be finite and non-negative"),
        ];

        for (value, message) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(FlockError::InvalidParams(message));
            }
        }

        Ok(())
    }
}

// Parameters for the simulation, partly adjustable via UI
#[derive(Debug, Clone)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub spawn_spacing: f32,
    pub spawn_y: f32,
    pub spawn_heading: f32,
    pub steering: SteeringParams,
    pub updates_per_frame: usize,
    // World-space size of the view before zoom is applied
    pub view_size: Vec2,
    pub view_zoom: f32,
    pub window_width: u32,
    pub window_height: u32,
    pub show_debug: bool,
    pub pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 20,
            spawn_spacing: 20.0,
            spawn_y: 200.0,
            spawn_heading: 0.0,
            steering: SteeringParams::default(),
            updates_per_frame: 3,
            view_size: vec2(800.0, 200.0),
            view_zoom: 0.5,
            window_width: 800,
            window_height: 600,
            show_debug: false,
            pause_simulation: false,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), FlockError> {
        if self.num_boids == 0 {
            return Err(FlockError::EmptyFlock);
        }
        self.validate_layout()?;
        self.steering.validate()?;

        if self.updates_per_frame == 0 {
            return Err(FlockError::InvalidParams(
                "updates_per_frame must be at least one",
            ));
        }
        if !self.view_size.is_finite() || self.view_size.x <= 0.0 || self.view_size.y <= 0.0 {
            return Err(FlockError::InvalidParams("view_size must be positive"));
        }
        if !self.view_zoom.is_finite() || self.view_zoom <= 0.0 {
            return Err(FlockError::InvalidParams("view_zoom must be positive"));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(FlockError::InvalidParams(
                "window dimensions must be non-zero",
            ));
        }

        Ok(())
    }

    pub(crate) fn validate_layout(&self) -> Result<(), FlockError> {
        if !self.spawn_spacing.is_finite() || !self.spawn_y.is_finite() {
            return Err(FlockError::InvalidParams("spawn layout must be finite"));
        }
        if !self.spawn_heading.is_finite() {
            return Err(FlockError::InvalidParams("spawn_heading must be finite"));
        }
        Ok(())
    }

    // Starting positions and headings: a row along x at a fixed height
    pub fn spawn_layout(&self) -> impl Iterator<Item = (Point2, f32)> + '_ {
        (0..self.num_boids).map(move |i| {
            (
                pt2(self.spawn_spacing * i as f32, self.spawn_y),
                self.spawn_heading,
            )
        })
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        1..=500
    }

    pub fn get_updates_per_frame_range() -> std::ops::RangeInclusive<usize> {
        1..=10
    }

    pub fn get_force_range() -> std::ops::RangeInclusive<f32> {
        0.0..=360.0
    }

    pub fn get_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=100.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        0.0..=100.0
    }
}
