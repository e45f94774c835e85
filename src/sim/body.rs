//! Ball state
//!
//! The one mutable record the simulation owns. Carries numeric state only -
//! sprites and drawing handles are a presentation concern and never live here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Playable area for one frame. `height` is the floor y-coordinate, not the
/// viewport height; the host recomputes this on resize and passes it fresh
/// each step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bounds for a viewport with the floor raised by `ground_offset`
    pub fn from_viewport(width: f32, height: f32, ground_offset: f32) -> Self {
        Self {
            width,
            height: height - ground_offset,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Rotation in radians
    pub rotation: f32,
    /// Angular velocity in radians/s
    pub angular_vel: f32,
    pub radius: f32,
    /// Remaining squash effect time (cosmetic, decay-only)
    pub squash_timer: f32,
    /// Deformation intensity set by the last kick
    pub squash_amount: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
            angular_vel: 0.0,
            radius,
            squash_timer: 0.0,
            squash_amount: 0.0,
        }
    }

    /// Reinitialize in place for a new round. Position moves, radius stays;
    /// velocity, rotation, spin and squash all go back to zero.
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.rotation = 0.0;
        self.angular_vel = 0.0;
        self.squash_timer = 0.0;
        self.squash_amount = 0.0;
    }

    /// Tick the squash timer down. Runs every frame regardless of phase and
    /// feeds nothing back into physics.
    pub fn decay_squash(&mut self, dt: f32) {
        self.squash_timer = (self.squash_timer - dt).max(0.0);
    }

    /// All numeric state finite (no NaN/∞)
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite()
            && self.vel.is_finite()
            && self.rotation.is_finite()
            && self.angular_vel.is_finite()
    }
}
