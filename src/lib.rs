/*
 * Boid Flocking Simulation - Module Definitions
 *
 * The steering core (angle, boid, physics, flock, params, error) has no
 * window dependency beyond nannou's vector types. The remaining modules are
 * the nannou driver that opens the window and draws the flock.
 */

// Re-export key components for easier access
pub use boid::{Boid, BoidId};
pub use camera::Camera;
pub use debug::DebugInfo;
pub use error::FlockError;
pub use flock::Flock;
pub use params::{SimulationParams, SteeringParams};
pub use physics::{Rule, RULE_ORDER};

// Define modules
pub mod angle;
pub mod app;
pub mod boid;
pub mod camera;
pub mod debug;
pub mod error;
pub mod flock;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod ui;

// Size of the rectangle drawn for each boid, in world units, before rotation
pub const BOID_WIDTH: f32 = 1.0;
pub const BOID_HEIGHT: f32 = 4.0;
