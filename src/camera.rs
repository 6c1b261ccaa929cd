/*
 * Camera Module
 *
 * This module defines the Camera struct that keeps the flock in view. The
 * camera looks at a fixed-size patch of the world centred on a target point
 * and stretches it over the whole window, one scale factor per axis. World
 * y grows downward on screen.
 */

use nannou::prelude::*;

pub struct Camera {
    pub position: Vec2,
    pub view_size: Vec2,
    pub zoom: f32,
}

impl Camera {
    pub fn new(view_size: Vec2, zoom: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            view_size,
            zoom,
        }
    }

    // Recenter the view on a world point
    pub fn follow(&mut self, target: Point2) {
        self.position = target;
    }

    // Size of the world patch currently visible; zoom below one shows less of the world
    pub fn visible_size(&self) -> Vec2 {
        self.view_size * self.zoom
    }

    // Screen pixels per world unit along each axis
    fn scale(&self, window_rect: Rect) -> Vec2 {
        let visible = self.visible_size();
        vec2(window_rect.w() / visible.x, window_rect.h() / visible.y)
    }

    // Convert a point from world space to screen space
    pub fn world_to_screen(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        let scale = self.scale(window_rect);
        let offset = point - self.position;
        vec2(offset.x * scale.x, -offset.y * scale.y) + window_rect.xy()
    }
}
