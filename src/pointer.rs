/*
 * Pointer Module
 *
 * Tracks the most recent pointer sample and computes the repulsion it
 * applies to nearby particles. The force falls off linearly from 1 at the
 * pointer to 0 at `influence_radius`.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PointerState {
    /// Client-space position; `None` until the first pointer move.
    pub position: Option<Vec2>,
    pub influence_radius: f32,
}

impl PointerState {
    pub fn new(influence_radius: f32) -> Self {
        Self {
            position: None,
            influence_radius,
        }
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    /// Offset to subtract from a particle at `at`, or `None` outside the field.
    ///
    /// The returned vector points from the particle towards the pointer, so
    /// subtracting it pushes the particle away.
    pub fn repulsion(&self, at: Vec2, strength: f32) -> Option<Vec2> {
        let pointer = self.position?;
        let delta = pointer - at;
        let distance = delta.length();

        // Coincident points have no direction to push along
        if distance <= 0.0 || distance >= self.influence_radius {
            return None;
        }

        let force = (self.influence_radius - distance) / self.influence_radius;
        Some(delta / distance * force * strength)
    }
}
