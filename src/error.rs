/*
 * Error Module
 *
 * Errors raised when building or stepping a flock.
 */

use thiserror::Error;

/// Errors that can occur when constructing or updating a flock.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FlockError {
    /// A flock needs at least one boid; centroid and mean heading are undefined otherwise.
    #[error("a flock must contain at least one boid")]
    EmptyFlock,
    /// Elapsed time was NaN, infinite or negative.
    #[error("invalid delta time: {0}")]
    InvalidDeltaTime(f32),
    /// A heading written from outside the steering rules was NaN or infinite.
    #[error("invalid heading: {0}")]
    InvalidHeading(f32),
    /// Indicates an invalid configuration value.
    #[error("invalid parameters: {0}")]
    InvalidParams(&'static str),
}
