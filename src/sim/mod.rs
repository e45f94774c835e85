//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Identical (Body, dt, Bounds) inputs produce identical outputs
//! - Single-body only, one step and at most one kick per frame
//! - No rendering or platform dependencies

pub mod body;
pub mod integrator;
pub mod kick;

pub use body::{Body, Bounds};
pub use integrator::Integrator;
pub use kick::{KickResolver, KickResult};
