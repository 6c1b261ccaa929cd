/*
 * Physics Module
 *
 * This module runs one simulation tick over a slice of boids. A tick is an
 * ordered list of steering stages followed by movement:
 * 1. Separation: turn away from the mean bearing of close neighbours
 * 2. Cohesion: turn toward the centroid of the whole flock
 * 3. Alignment: turn toward the mean heading of the whole flock
 *
 * Each stage reads one snapshot of the flock, stores a target heading per
 * boid, and only then applies the bounded nudges. Boids within a stage never
 * see each other's updated headings.
 */

use nannou::prelude::*;
use tracing::trace;

use crate::angle::{bearing, distance, opposite};
use crate::boid::Boid;
use crate::params::SteeringParams;

/// Points closer than this are treated as coincident and have no bearing.
///
/// The threshold is absolute: a boid within this distance of the centroid
/// skips cohesion even when it is not exactly on it, and neighbours this
/// close are left out of separation.
pub const COINCIDENT_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Separation,
    Cohesion,
    Alignment,
}

// Stages run in this order every tick, before movement
pub const RULE_ORDER: [Rule; 3] = [Rule::Separation, Rule::Cohesion, Rule::Alignment];

impl Rule {
    // Maximum turn rate of this rule, in degrees per second
    pub fn force(self, steering: &SteeringParams) -> f32 {
        match self {
            Rule::Separation => steering.separation_force,
            Rule::Cohesion => steering.cohesion_force,
            Rule::Alignment => steering.alignment_force,
        }
    }

    /// Target heading for every boid, computed from the current snapshot.
    /// `None` leaves that boid's heading untouched for this stage.
    pub(crate) fn targets(self, boids: &[Boid], steering: &SteeringParams) -> Vec<Option<f32>> {
        match self {
            Rule::Separation => separation_targets(boids, steering.separation_radius),
            Rule::Cohesion => cohesion_targets(boids),
            Rule::Alignment => alignment_targets(boids),
        }
    }
}

// Advance the boids by one tick; `Flock::update` has already checked `delta_time`
pub(crate) fn step(boids: &mut [Boid], steering: &SteeringParams, delta_time: f32) {
    debug_assert!(delta_time.is_finite() && delta_time >= 0.0);

    for rule in RULE_ORDER {
        apply_rule(boids, rule, steering, delta_time);
    }

    for boid in boids.iter_mut() {
        boid.advance(steering.movement_speed, delta_time);
    }
}

fn apply_rule(boids: &mut [Boid], rule: Rule, steering: &SteeringParams, delta_time: f32) {
    let targets = rule.targets(boids, steering);
    let max_step = rule.force(steering) * delta_time;

    let mut steered = 0;
    for (boid, target) in boids.iter_mut().zip(targets) {
        if let Some(target) = target {
            boid.steer_towards(target, max_step);
            steered += 1;
        }
    }

    trace!(?rule, steered, max_step, "applied steering stage");
}

// Mean position of the boids, or None for an empty slice
pub fn centroid(boids: &[Boid]) -> Option<Point2> {
    if boids.is_empty() {
        return None;
    }

    let sum = boids.iter().fold(Vec2::ZERO, |acc, boid| acc + boid.position);
    Some(sum / boids.len() as f32)
}

// Arithmetic mean of the headings, or None for an empty slice
pub fn mean_heading(boids: &[Boid]) -> Option<f32> {
    if boids.is_empty() {
        return None;
    }

    let sum: f32 = boids.iter().map(Boid::heading).sum();
    Some(sum / boids.len() as f32)
}

// Bearing from `from` to `to`, or None when the two points coincide
fn defined_bearing(from: Point2, to: Point2) -> Option<f32> {
    if distance(from, to) < COINCIDENT_EPSILON {
        None
    } else {
        Some(bearing(from, to))
    }
}

fn separation_targets(boids: &[Boid], radius: f32) -> Vec<Option<f32>> {
    let mut bearings = Vec::new();

    boids
        .iter()
        .enumerate()
        .map(|(i, boid)| {
            bearings.clear();

            for (j, other) in boids.iter().enumerate() {
                if i == j || distance(boid.position, other.position) >= radius {
                    continue;
                }
                if let Some(angle) = defined_bearing(boid.position, other.position) {
                    bearings.push(angle);
                }
            }

            if bearings.is_empty() {
                return None;
            }

            let sum: f32 = bearings.iter().sum();
            let average = sum / bearings.len() as f32;
            Some(opposite(average))
        })
        .collect()
}

fn cohesion_targets(boids: &[Boid]) -> Vec<Option<f32>> {
    let Some(center) = centroid(boids) else {
        return Vec::new();
    };

    boids
        .iter()
        .map(|boid| defined_bearing(boid.position, center))
        .collect()
}

fn alignment_targets(boids: &[Boid]) -> Vec<Option<f32>> {
    let Some(average) = mean_heading(boids) else {
        return Vec::new();
    };

    vec![Some(average); boids.len()]
}
