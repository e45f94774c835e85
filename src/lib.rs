//! Keepy Uppy - keep the ball airborne
//!
//! Core modules:
//! - `sim`: Deterministic single-body physics (integration, collisions, kicks)
//! - `session`: Game lifecycle, phase machine, score
//! - `renderer`: Canvas 2D presentation adapter
//! - `platform`: Frame timing and haptics
//! - `backend`: Request/response contracts of the session service
//! - `highscores`: Local personal-best persistence

pub mod backend;
pub mod config;
pub mod highscores;
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::Config;
pub use highscores::BestScore;
pub use session::{GamePhase, Session};
pub use sim::{Body, Bounds, Integrator, KickResolver, KickResult};
