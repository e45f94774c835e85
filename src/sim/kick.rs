//! Impulse resolver
//!
//! Converts a pointer/touch contact into a velocity and spin change. The
//! kick pushes the ball away from the contact point with an upward bias so
//! that tapping anywhere near the ball keeps it playable; contact offset
//! from center drives spin, which the integrator turns into curve.

use glam::Vec2;

use super::body::Body;
use crate::config::{KickConfig, SquashConfig};

/// Horizontal share of the kick force
const HORIZONTAL_FORCE_SCALE: f32 = 0.6;
/// Force floor for edge contacts: never below this fraction of base force
const MIN_POWER_FRACTION: f32 = 0.7;

/// Outcome of a kick attempt. A miss is a normal outcome, not a failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KickResult {
    /// Whether the contact landed inside the touch radius
    pub hit: bool,
    /// Impulse magnitude applied (0 on a miss)
    pub force: f32,
    /// 1.0 = dead center, approaching 0.0 at the touch-radius edge
    pub centeredness: f32,
}

impl KickResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            force: 0.0,
            centeredness: 0.0,
        }
    }
}

/// Resolves contact points into impulses. Immutable tuning injected at
/// construction; never raises - degenerate contacts take fallback branches.
#[derive(Debug, Clone, Copy)]
pub struct KickResolver {
    kick: KickConfig,
    squash: SquashConfig,
}

impl KickResolver {
    pub fn new(kick: KickConfig, squash: SquashConfig) -> Self {
        Self { kick, squash }
    }

    /// Apply a kick at `touch` (surface-local coordinates).
    ///
    /// A contact outside the touch radius returns a miss without mutating
    /// the body. A contact exactly at the touch radius counts as a miss; a
    /// contact exactly at the center kicks straight up.
    pub fn kick(&self, body: &mut Body, touch: Vec2) -> KickResult {
        let offset = touch - body.pos;
        let distance = offset.length();
        let touch_radius = body.radius * self.kick.touch_radius_multiplier;

        if distance >= touch_radius {
            return KickResult::miss();
        }

        // Push away from the contact point, through the center and beyond.
        // A dead-center contact has no direction; fall back to the unit
        // divisor so the bias below resolves it to straight up.
        let divisor = if distance > 0.0 { distance } else { 1.0 };
        let mut dir = -offset / divisor;

        // Blend the vertical component toward straight-up, then renormalize.
        // An unbiased dead-center contact degenerates to a zero vector;
        // straight up is the fallback direction.
        dir.y = dir.y * (1.0 - self.kick.vertical_bias) - self.kick.vertical_bias;
        dir = dir.normalize_or(Vec2::NEG_Y);

        let centeredness = 1.0 - distance / touch_radius;
        let force = self.kick.base_force * (MIN_POWER_FRACTION + (1.0 - MIN_POWER_FRACTION) * centeredness);

        let retention = self.kick.momentum_retention;
        body.vel.x = dir.x * force * HORIZONTAL_FORCE_SCALE + body.vel.x * retention.horizontal;
        body.vel.y = dir.y * force + body.vel.y * retention.vertical;

        // Horizontal contact offset drives spin, clamped to the spin cap
        let spin_offset = offset.x / body.radius;
        body.angular_vel = (body.angular_vel + spin_offset * self.kick.spin_factor * force)
            .clamp(-self.kick.max_spin, self.kick.max_spin);

        body.squash_timer = self.squash.duration;
        body.squash_amount = self.squash.amount;

        KickResult {
            hit: true,
            force,
            centeredness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KickConfig, VisualsConfig};
    use proptest::prelude::*;

    fn resolver() -> KickResolver {
        KickResolver::new(KickConfig::default(), VisualsConfig::default().squash)
    }

    #[test]
    fn test_center_kick_is_straight_up() {
        let resolver = resolver();
        let mut body = Body::new(Vec2::new(400.0, 300.0), 50.0);

        let result = resolver.kick(&mut body, Vec2::new(400.0, 300.0));

        assert!(result.hit);
        assert_eq!(result.centeredness, 1.0);
        assert!(body.is_finite());
        assert_eq!(body.vel.x, 0.0);
        // Full force, straight up
        assert_eq!(body.vel.y, -1500.0);
        assert_eq!(body.angular_vel, 0.0);
    }

    #[test]
    fn test_contact_at_touch_radius_is_a_miss() {
        let resolver = resolver();
        let mut body = Body::new(Vec2::new(400.0, 300.0), 50.0);
        body.vel = Vec2::new(123.0, -45.0);

        // touch radius = 50 * 1.5 = 75; contact exactly on the boundary
        let result = resolver.kick(&mut body, Vec2::new(475.0, 300.0));

        assert!(!result.hit);
        assert_eq!(result, KickResult::miss());
        // Miss mutates nothing
        assert_eq!(body.vel, Vec2::new(123.0, -45.0));
        assert_eq!(body.squash_timer, 0.0);
    }

    #[test]
    fn test_contact_outside_touch_radius_is_a_miss() {
        let resolver = resolver();
        let mut body = Body::new(Vec2::new(400.0, 300.0), 50.0);

        let result = resolver.kick(&mut body, Vec2::new(600.0, 300.0));

        assert!(!result.hit);
        assert_eq!(body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_kick_pushes_away_from_contact() {
        let resolver = resolver();
        let mut body = Body::new(Vec2::new(400.0, 300.0), 50.0);

        // Contact left of center pushes the ball right
        resolver.kick(&mut body, Vec2::new(370.0, 300.0));
        assert!(body.vel.x > 0.0);
        assert!(body.vel.y < 0.0, "kicks always trend upward");

        // Contact below center pushes up
        let mut body = Body::new(Vec2::new(400.0, 300.0), 50.0);
        resolver.kick(&mut body, Vec2::new(400.0, 330.0));
        assert_eq!(body.vel.x, 0.0);
        assert!(body.vel.y < 0.0);
    }

    #[test]
    fn test_off_center_never_below_seventy_percent_power() {
        let resolver = resolver();
        let mut body = Body::new(Vec2::new(400.0, 300.0), 50.0);

        // Just inside the touch-radius edge
        let result = resolver.kick(&mut body, Vec2::new(474.9, 300.0));

        assert!(result.hit);
        assert!(result.force >= 0.7 * 1500.0);
        assert!(result.force <= 1500.0);
    }

    #[test]
    fn test_momentum_retention_is_additive() {
        let resolver = resolver();
        let mut still = Body::new(Vec2::new(400.0, 300.0), 50.0);
        let mut moving = Body::new(Vec2::new(400.0, 300.0), 50.0);
        moving.vel = Vec2::new(500.0, -400.0);

        resolver.kick(&mut still, Vec2::new(400.0, 320.0));
        resolver.kick(&mut moving, Vec2::new(400.0, 320.0));

        // Retention keeps a fraction of pre-kick velocity on top of the kick
        assert_eq!(moving.vel.x, still.vel.x + 500.0 * 0.2);
        assert_eq!(moving.vel.y, still.vel.y + -400.0 * 0.1);
    }

    #[test]
    fn test_side_contact_imparts_spin() {
        let resolver = resolver();
        let mut body = Body::new(Vec2::new(400.0, 300.0), 50.0);

        // Contact right of center: positive offset, positive spin
        let result = resolver.kick(&mut body, Vec2::new(430.0, 300.0));

        assert!(result.hit);
        assert!(body.angular_vel > 0.0);
        assert!(body.angular_vel <= 25.0);
    }

    #[test]
    fn test_kick_sets_squash_effect() {
        let resolver = resolver();
        let mut body = Body::new(Vec2::new(400.0, 300.0), 50.0);

        resolver.kick(&mut body, Vec2::new(400.0, 300.0));

        assert_eq!(body.squash_timer, 0.15);
        assert_eq!(body.squash_amount, 0.25);
    }

    proptest! {
        #[test]
        fn prop_spin_always_within_cap(
            touches in prop::collection::vec((350.0f32..450.0, 250.0f32..350.0), 1..30),
        ) {
            let resolver = resolver();
            let mut body = Body::new(Vec2::new(400.0, 300.0), 50.0);

            for (x, y) in touches {
                resolver.kick(&mut body, Vec2::new(x, y));
                prop_assert!(body.angular_vel.abs() <= 25.0);
            }
        }

        #[test]
        fn prop_hit_velocity_always_finite_and_upward_biased(
            dx in -74.0f32..74.0,
            dy in -74.0f32..74.0,
        ) {
            let resolver = resolver();
            let mut body = Body::new(Vec2::new(400.0, 300.0), 50.0);

            let result = resolver.kick(&mut body, Vec2::new(400.0 + dx, 300.0 + dy));
            if result.hit {
                prop_assert!(body.is_finite());
                // vertical_bias 0.7 > 0.5 guarantees an upward component
                prop_assert!(body.vel.y < 0.0);
            }
        }
    }
}
