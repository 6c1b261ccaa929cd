/*
 * Angle Module
 *
 * Planar geometry helpers used by the steering rules. All angles are in
 * degrees; headings live in [0, 360).
 */

use nannou::prelude::Point2;

const FULL_TURN: f32 = 360.0;
const HALF_TURN: f32 = 180.0;

// Euclidean distance between two points
pub fn distance(a: Point2, b: Point2) -> f32 {
    a.distance(b)
}

// Angle of the vector from `a` to `b`, in (-180, 180]. Not normalized.
pub fn bearing(a: Point2, b: Point2) -> f32 {
    let difference = b - a;
    difference.y.atan2(difference.x).to_degrees()
}

/// Maps any finite angle into `[0, 360)` using floored modulo, so negative
/// inputs wrap forward.
pub fn normalize(theta: f32) -> f32 {
    let wrapped = theta.rem_euclid(FULL_TURN);
    // rem_euclid can round tiny negative inputs up to exactly 360
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

pub fn opposite(theta: f32) -> f32 {
    normalize(normalize(theta) + HALF_TURN)
}

/// Signed shortest rotation from `from` to `to`, in (-180, 180].
pub fn angular_difference(from: f32, to: f32) -> f32 {
    let difference = normalize(to) - normalize(from);

    if difference > HALF_TURN {
        difference - FULL_TURN
    } else if difference <= -HALF_TURN {
        difference + FULL_TURN
    } else {
        difference
    }
}

/// Rotates `from` toward `to` along the shorter arc by at most `max_step`
/// degrees and returns the normalized result. A negative budget moves nothing.
pub fn steering_nudge(from: f32, to: f32, max_step: f32) -> f32 {
    let n_from = normalize(from);
    let difference = angular_difference(n_from, to);

    let adjustment = difference.abs().min(max_step.max(0.0));
    let step = if difference > 0.0 { adjustment } else { -adjustment };

    normalize(n_from + step)
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}
