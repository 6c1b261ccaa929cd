/*
 * Flock Module
 *
 * The Flock owns every boid for the lifetime of a run and hands out their
 * identities. A flock is never empty: construction with zero boids fails, so
 * centroid and mean heading are always defined.
 */

use nannou::prelude::*;
use tracing::{debug, info, trace};

use crate::boid::{Boid, BoidId};
use crate::error::FlockError;
use crate::params::{SimulationParams, SteeringParams};
use crate::physics;

// Monotonic id source owned by a single flock
#[derive(Debug, Default)]
struct IdCounter {
    next: u64,
}

impl IdCounter {
    fn allocate(&mut self) -> BoidId {
        let id = BoidId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug)]
pub struct Flock {
    boids: Vec<Boid>,
    steering: SteeringParams,
    ids: IdCounter,
}

impl Flock {
    // Build the standard row layout described by `params`
    pub fn new(params: &SimulationParams) -> Result<Self, FlockError> {
        params.validate_layout()?;
        let flock = Self::from_spawns(params.spawn_layout(), params.steering)?;

        info!(
            boids = flock.len(),
            spacing = params.spawn_spacing,
            y = params.spawn_y,
            "Created flock"
        );
        Ok(flock)
    }

    /// Build a flock from explicit `(position, heading)` pairs, in order.
    ///
    /// Ids are assigned from zero in iteration order. Fails with
    /// [`FlockError::EmptyFlock`] when `spawns` yields nothing.
    pub fn from_spawns<I>(spawns: I, steering: SteeringParams) -> Result<Self, FlockError>
    where
        I: IntoIterator<Item = (Point2, f32)>,
    {
        steering.validate()?;

        let mut ids = IdCounter::default();
        let mut boids = Vec::new();
        for (position, heading) in spawns {
            if !position.is_finite() || !heading.is_finite() {
                return Err(FlockError::InvalidParams("spawn position and heading must be finite"));
            }
            boids.push(Boid::new(ids.allocate(), position, heading));
        }

        if boids.is_empty() {
            return Err(FlockError::EmptyFlock);
        }

        Ok(Self {
            boids,
            steering,
            ids,
        })
    }

    /// Advance the simulation by `delta_time` seconds.
    ///
    /// NaN, infinite or negative values are rejected and leave the flock
    /// untouched. Large values are applied as-is.
    pub fn update(&mut self, delta_time: f32) -> Result<(), FlockError> {
        if !delta_time.is_finite() || delta_time < 0.0 {
            return Err(FlockError::InvalidDeltaTime(delta_time));
        }

        physics::step(&mut self.boids, &self.steering, delta_time);
        trace!(delta_time, boids = self.boids.len(), "flock updated");
        Ok(())
    }

    // Mean position of all boids
    pub fn centroid(&self) -> Point2 {
        // Construction guarantees at least one boid
        physics::centroid(&self.boids).unwrap_or(Point2::ZERO)
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Boid> {
        self.boids.iter()
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    // Always false; kept alongside `len` for the usual collection API
    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn steering(&self) -> &SteeringParams {
        &self.steering
    }

    // Replace the rule constants; takes effect from the next update
    pub fn set_steering(&mut self, steering: SteeringParams) -> Result<(), FlockError> {
        steering.validate()?;
        debug!(?steering, "Steering parameters changed");
        self.steering = steering;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Flock {
    type Item = &'a Boid;
    type IntoIter = std::slice::Iter<'a, Boid>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
