//! Per-frame integration and boundary resolution
//!
//! Advances the ball by one time step: gravity, the spin-curvature (Magnus)
//! force, air resistance, explicit Euler position update, then containment
//! against the rectangular play area. Step order matters - later stages
//! operate on already-updated velocity.
//!
//! Air resistance and angular damping are multiplicative per step, so the
//! effective drag varies with frame rate. Known sensitivity, kept as-is:
//! time-normalizing it would change gameplay feel.

use glam::Vec2;

use super::body::{Body, Bounds};
use crate::config::PhysicsConfig;

/// Fraction of tangential velocity a wall bounce converts into spin
const WALL_SPIN_FRICTION: f32 = 0.01;

/// Advances a [`Body`] through time. Holds the immutable physics parameters;
/// all per-frame state comes in through [`step`](Integrator::step).
#[derive(Debug, Clone, Copy)]
pub struct Integrator {
    physics: PhysicsConfig,
}

impl Integrator {
    pub fn new(physics: PhysicsConfig) -> Self {
        Self { physics }
    }

    /// Advance `body` by `dt` seconds and resolve boundary collisions.
    ///
    /// Returns `true` if the ball touched the floor this step - the terminal
    /// signal; the floor is not elastic. `dt` must already be clamped to the
    /// configured maximum by the caller: the integrator does not clamp and
    /// will take large position jumps if fed an unclamped gap.
    pub fn step(&self, body: &mut Body, dt: f32, bounds: Bounds) -> bool {
        self.apply_gravity(body, dt);
        self.apply_magnus(body, dt);
        self.apply_drag(body);
        Self::integrate(body, dt);
        self.resolve_bounds(body, bounds)
    }

    fn apply_gravity(&self, body: &mut Body, dt: f32) {
        body.vel.y += self.physics.gravity * dt;
    }

    /// Spin curves the trajectory: force proportional to angular velocity and
    /// speed, applied perpendicular to the current velocity. Suppressed below
    /// the minimum speed, which also keeps the direction well defined.
    fn apply_magnus(&self, body: &mut Body, dt: f32) {
        let speed = body.vel.length();
        if speed > self.physics.min_velocity {
            let force = body.angular_vel * speed * self.physics.magnus_strength;
            let normal = Vec2::new(-body.vel.y, body.vel.x) / speed;
            body.vel += normal * force * dt;
        }
    }

    fn apply_drag(&self, body: &mut Body) {
        body.vel *= self.physics.air_resistance;
        body.angular_vel *= self.physics.angular_damping;
    }

    fn integrate(body: &mut Body, dt: f32) {
        body.pos += body.vel * dt;
        body.rotation += body.angular_vel * dt;
    }

    /// Clamp-and-reflect against the walls and ceiling; walls also convert a
    /// fraction of the tangential velocity into spin. Floor contact clamps
    /// and reports terminal instead of bouncing.
    fn resolve_bounds(&self, body: &mut Body, bounds: Bounds) -> bool {
        let damping = self.physics.bounce_damping;

        if body.pos.x - body.radius < 0.0 {
            body.pos.x = body.radius;
            body.vel.x = -body.vel.x * damping;
            body.angular_vel += body.vel.y * WALL_SPIN_FRICTION;
        } else if body.pos.x + body.radius > bounds.width {
            body.pos.x = bounds.width - body.radius;
            body.vel.x = -body.vel.x * damping;
            body.angular_vel -= body.vel.y * WALL_SPIN_FRICTION;
        }

        if body.pos.y - body.radius < 0.0 {
            body.pos.y = body.radius;
            body.vel.y = -body.vel.y * damping;
        }

        if body.pos.y + body.radius > bounds.height {
            body.pos.y = bounds.height - body.radius;
            return true;
        }

        false
    }
}
