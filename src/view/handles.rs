use glam::{UVec2, Vec2};

use crate::types::{DEFAULT_RAY_OFFSET, HANDLE_CLICK_RADIUS, HANDLE_RADIUS};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Handle {
    Start,
    End,
}

/// Draggable endpoints of the displayed ray, in window pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RayHandles {
    pub start: Vec2,
    pub end: Vec2,
    pub radius: f32,
    pub click_radius: f32,
    active: Handle,
}

impl RayHandles {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            radius: HANDLE_RADIUS,
            click_radius: HANDLE_CLICK_RADIUS,
            active: Handle::Start,
        }
    }

    /// Start handle at the center of the viewport, end handle offset diagonally.
    pub fn centered(viewport: UVec2) -> Self {
        let start = (viewport / 2).as_vec2();
        Self::new(start, start + Vec2::splat(DEFAULT_RAY_OFFSET))
    }

    /// Handle that will move on the next [`RayHandles::translate`].
    pub fn active(&self) -> Handle {
        self.active
    }

    /// Returns the handle under `pos`, making it the active one.
    ///
    /// The end handle wins when both are in reach.
    pub fn hit_test(&mut self, pos: Vec2) -> Option<Handle> {
        let hit = if pos.distance(self.end) <= self.click_radius {
            Handle::End
        } else if pos.distance(self.start) <= self.click_radius {
            Handle::Start
        } else {
            return None;
        };
        self.active = hit;
        Some(hit)
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self.active {
            Handle::Start => self.start += delta,
            Handle::End => self.end += delta,
        }
    }

    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }
}
