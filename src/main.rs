/*
 * Boid Flocking Simulation
 *
 * Boids steer by turning their heading a bounded amount per tick, following
 * three rules:
 * 1. Separation: Turn away from neighbours that are too close
 * 2. Cohesion: Turn toward the centre of the flock
 * 3. Alignment: Turn toward the flock's average heading
 *
 * The camera follows the flock's centroid. Set RUST_LOG to control logging.
 */

use anyhow::{Context, Result};
use steering_boids::app::{model, update};
use steering_boids::SimulationParams;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    SimulationParams::default()
        .validate()
        .context("default simulation parameters are invalid")?;

    info!("Starting boid simulation");
    nannou::app(model).update(update).run();
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
