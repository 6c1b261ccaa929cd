/*
 * Debug Information Module
 *
 * Frame timing and tick counters shown in the control panel and the
 * on-screen overlay.
 */

use nannou::prelude::*;
use std::time::Duration;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_this_frame: usize,
    pub total_ticks: u64,
    pub rejected_ticks: u64,
    pub centroid: Point2,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks_this_frame: 0,
            total_ticks: 0,
            rejected_ticks: 0,
            centroid: Point2::ZERO,
        }
    }
}

impl DebugInfo {
    // Lines shown by the overlay, top to bottom
    pub fn lines(&self, boid_count: usize) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Boids: {}", boid_count),
            format!("Ticks this frame: {}", self.ticks_this_frame),
            format!("Total ticks: {}", self.total_ticks),
            format!("Centroid: ({:.1}, {:.1})", self.centroid.x, self.centroid.y),
        ]
    }
}
