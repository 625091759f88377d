//! Wave engine for the sonar ping simulation.
//!
//! Owns the ping state machine, advances it once per frame, and produces
//! `FrameSnapshot`s for whatever renders them. Completely headless, enabling
//! deterministic testing.

pub mod accounting;
pub mod engine;
pub mod geometry;

pub use engine::WaveEngine;
pub use sonar_core as core;
