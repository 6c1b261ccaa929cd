/*
 * Boid Module
 *
 * This module defines the Boid struct: an identity, a position and a heading.
 * The heading is kept in [0, 360) by every method that writes it, so readers
 * never have to normalize it themselves.
 */

use nannou::prelude::*;
use std::fmt;

use crate::angle::{degrees_to_radians, normalize, steering_nudge};
use crate::error::FlockError;
use crate::{BOID_HEIGHT, BOID_WIDTH};

// Identity handed out by a flock's id counter, never reused within a flock
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoidId(pub u64);

impl fmt::Display for BoidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boid#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Boid {
    id: BoidId,
    pub position: Point2,
    heading: f32,
}

impl Boid {
    pub(crate) fn new(id: BoidId, position: Point2, heading: f32) -> Self {
        Self {
            id,
            position,
            heading: normalize(heading),
        }
    }

    pub fn id(&self) -> BoidId {
        self.id
    }

    // Heading in degrees, always within [0, 360)
    pub fn heading(&self) -> f32 {
        self.heading
    }

    // NaN or infinite headings are rejected and leave the boid unchanged
    pub fn set_heading(&mut self, heading: f32) -> Result<(), FlockError> {
        if !heading.is_finite() {
            return Err(FlockError::InvalidHeading(heading));
        }
        self.heading = normalize(heading);
        Ok(())
    }

    // Rotate toward `target` by at most `max_step` degrees
    pub(crate) fn steer_towards(&mut self, target: f32, max_step: f32) {
        self.heading = steering_nudge(self.heading, target, max_step);
    }

    // Unit vector pointing along the heading
    pub fn direction(&self) -> Vec2 {
        let radians = degrees_to_radians(self.heading);
        vec2(radians.cos(), radians.sin())
    }

    // Advance along the heading
    pub(crate) fn advance(&mut self, speed: f32, delta_time: f32) {
        self.position += self.direction() * speed * delta_time;
    }

    /// Corners of the rectangle used to draw this boid, in world space.
    ///
    /// The rectangle is anchored at the boid's position by one corner. Its
    /// short side runs along the heading and its long side a quarter turn
    /// further round, so the flock reads as a row of thin bars.
    pub fn outline(&self) -> [Point2; 4] {
        let forward = self.direction();
        let side = vec2(-forward.y, forward.x);

        let across = forward * BOID_WIDTH;
        let along = side * BOID_HEIGHT;

        [
            self.position,
            self.position + across,
            self.position + across + along,
            self.position + along,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_normalizes_heading() {
        let boid = Boid::new(BoidId(0), pt2(0.0, 0.0), -90.0);
        assert_eq!(boid.heading(), 270.0);
    }

    #[test]
    fn set_heading_normalizes() {
        let mut boid = Boid::new(BoidId(3), pt2(1.0, 2.0), 0.0);
        boid.set_heading(725.0).unwrap();
        assert_eq!(boid.heading(), 5.0);
        assert_eq!(boid.id(), BoidId(3));
    }

    #[test]
    fn set_heading_rejects_non_finite_values() {
        let mut boid = Boid::new(BoidId(0), pt2(0.0, 0.0), 30.0);

        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(matches!(boid.set_heading(bad), Err(FlockError::InvalidHeading(_))));
            assert_eq!(boid.heading(), 30.0);
        }
    }

    #[test]
    fn steering_is_bounded() {
        let mut boid = Boid::new(BoidId(0), pt2(0.0, 0.0), 10.0);
        boid.steer_towards(200.0, 30.0);
        assert_eq!(boid.heading(), 340.0);
    }

    #[test]
    fn advance_moves_along_heading() {
        let mut boid = Boid::new(BoidId(0), pt2(0.0, 200.0), 90.0);
        boid.advance(10.0, 0.5);
        assert!(boid.position.x.abs() < 1e-5);
        assert!((boid.position.y - 205.0).abs() < 1e-5);
    }

    #[test]
    fn outline_is_anchored_at_position() {
        let boid = Boid::new(BoidId(0), pt2(5.0, 5.0), 0.0);
        let corners = boid.outline();

        assert_eq!(corners[0], boid.position);
        // Heading 0: short side along +x, long side along +y
        assert!(corners[1].distance(pt2(5.0 + BOID_WIDTH, 5.0)) < 1e-5);
        assert!(corners[2].distance(pt2(5.0 + BOID_WIDTH, 5.0 + BOID_HEIGHT)) < 1e-5);
        assert!(corners[3].distance(pt2(5.0, 5.0 + BOID_HEIGHT)) < 1e-5);
    }

    #[test]
    fn outline_turns_with_heading() {
        let boid = Boid::new(BoidId(0), pt2(0.0, 0.0), 90.0);
        let corners = boid.outline();

        // A quarter turn puts the short side along +y and the long side along -x
        assert!(corners[1].distance(pt2(0.0, BOID_WIDTH)) < 1e-5);
        assert!(corners[3].distance(pt2(-BOID_HEIGHT, 0.0)) < 1e-5);
    }

    #[test]
    fn id_displays_with_prefix() {
        assert_eq!(BoidId(12).to_string(), "boid#12");
    }
}
