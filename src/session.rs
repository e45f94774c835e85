//! Game session
//!
//! Owns the ball, the physics components, the score and the phase machine.
//! The host loop drives it with one `frame` call per rendered frame and one
//! `pointer` call per contact event, always from the same thread.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::sim::{Body, Bounds, Integrator, KickResolver, KickResult};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start screen
    Ready,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Ball touched the ground
    GameOver,
}

/// One game session: a single ball plus score and lifecycle
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    integrator: Integrator,
    kicker: KickResolver,
    body: Body,
    phase: GamePhase,
    score: u32,
}

impl Session {
    pub fn new(config: Config, viewport_w: f32, viewport_h: f32) -> Self {
        let radius = config.ball.radius_for(viewport_w, viewport_h);
        let body = Body::new(Vec2::new(viewport_w / 2.0, viewport_h / 2.0), radius);
        let integrator = Integrator::new(config.physics);
        let kicker = KickResolver::new(config.kick, config.visuals.squash);
        Self {
            config,
            integrator,
            kicker,
            body,
            phase: GamePhase::Ready,
            score: 0,
        }
    }

    /// Begin a round: ball re-centered at the start height with the initial
    /// upward velocity, score cleared.
    pub fn start(&mut self, viewport_w: f32, viewport_h: f32) {
        self.body.radius = self.config.ball.radius_for(viewport_w, viewport_h);
        self.body.reset(Vec2::new(
            viewport_w / 2.0,
            viewport_h * self.config.screen.ball_start_y_ratio,
        ));
        self.body.vel.y = self.config.ball.initial_velocity_y;
        self.score = 0;
        self.phase = GamePhase::Playing;
        log::info!("Round started");
    }

    /// Advance one frame. The squash timer decays in every phase; physics
    /// steps only while playing. Returns true when this frame ended the
    /// round. `dt` must already be clamped to `gameplay.max_delta_time`.
    pub fn frame(&mut self, dt: f32, bounds: Bounds) -> bool {
        self.body.decay_squash(dt);

        if self.phase != GamePhase::Playing {
            return false;
        }

        if self.integrator.step(&mut self.body, dt, bounds) {
            self.phase = GamePhase::GameOver;
            log::info!("Ball grounded, final score {}", self.score);
            return true;
        }
        false
    }

    /// Feed a contact event (surface-local coordinates). A hit scores one
    /// point; outside the playing phase contacts are ignored.
    pub fn pointer(&mut self, touch: Vec2) -> KickResult {
        if self.phase != GamePhase::Playing {
            return KickResult::miss();
        }

        let result = self.kicker.kick(&mut self.body, touch);
        if result.hit {
            self.score += 1;
        }
        result
    }

    /// Pause/resume at a frame boundary. The body stays valid to resume from.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }

    /// Re-clamp the ball radius after a viewport change
    pub fn resize(&mut self, viewport_w: f32, viewport_h: f32) {
        self.body.radius = self.config.ball.radius_for(viewport_w, viewport_h);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Config::default(), 800.0, 600.0)
    }

    fn bounds() -> Bounds {
        Bounds::from_viewport(800.0, 600.0, 30.0)
    }

    #[test]
    fn test_start_positions_ball_with_initial_velocity() {
        let mut s = session();
        s.start(800.0, 600.0);

        assert_eq!(s.phase(), GamePhase::Playing);
        assert_eq!(s.score(), 0);
        assert_eq!(s.body().pos, Vec2::new(400.0, 180.0));
        assert_eq!(s.body().vel, Vec2::new(0.0, -200.0));
    }

    #[test]
    fn test_hit_scores_miss_does_not() {
        let mut s = session();
        s.start(800.0, 600.0);
        let center = s.body().pos;

        assert!(s.pointer(center).hit);
        assert_eq!(s.score(), 1);

        assert!(!s.pointer(center + Vec2::new(500.0, 0.0)).hit);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_pointer_ignored_outside_playing() {
        let mut s = session();
        let center = s.body().pos;

        assert!(!s.pointer(center).hit);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_grounding_ends_the_round() {
        let mut s = session();
        s.start(800.0, 600.0);

        // Let it fall; no kicks
        let mut ended = false;
        for _ in 0..600 {
            if s.frame(1.0 / 60.0, bounds()) {
                ended = true;
                break;
            }
        }

        assert!(ended);
        assert_eq!(s.phase(), GamePhase::GameOver);
        let b = s.body();
        assert_eq!(b.pos.y, bounds().height - b.radius);

        // Further frames are inert
        let pos = s.body().pos;
        assert!(!s.frame(1.0 / 60.0, bounds()));
        assert_eq!(s.body().pos, pos);
    }

    #[test]
    fn test_pause_freezes_physics_but_decays_squash() {
        let mut s = session();
        s.start(800.0, 600.0);
        s.pointer(s.body().pos);
        assert!(s.body().squash_timer > 0.0);

        s.toggle_pause();
        assert_eq!(s.phase(), GamePhase::Paused);

        let before = s.body().clone();
        s.frame(1.0 / 60.0, bounds());
        assert_eq!(s.body().pos, before.pos);
        assert_eq!(s.body().vel, before.vel);
        assert!(s.body().squash_timer < before.squash_timer);

        s.toggle_pause();
        assert_eq!(s.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_pause_noop_when_not_playing() {
        let mut s = session();
        s.toggle_pause();
        assert_eq!(s.phase(), GamePhase::Ready);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut s = session();
        s.start(800.0, 600.0);
        s.pointer(s.body().pos);
        while !s.frame(1.0 / 60.0, bounds()) {}
        assert_eq!(s.phase(), GamePhase::GameOver);

        s.start(800.0, 600.0);
        assert_eq!(s.phase(), GamePhase::Playing);
        assert_eq!(s.score(), 0);
        assert_eq!(s.body().vel, Vec2::new(0.0, -200.0));
    }

    #[test]
    fn test_resize_reclamps_radius() {
        let mut s = session();
        assert_eq!(s.body().radius, 60.0);

        s.resize(300.0, 600.0);
        assert_eq!(s.body().radius, 40.0);

        s.resize(3000.0, 3000.0);
        assert_eq!(s.body().radius, 70.0);
    }
}
