//! Headless animator for the sonar ping simulation.
//!
//! Drives a `WaveEngine` once per frame, hands each snapshot to a
//! `FrameSink`, and optionally paces frames in real time. Stands in for
//! the plotting front end: the frame trace it writes is the run's output
//! artifact.

pub mod animator;
pub mod cli;
pub mod error;
pub mod sink;

pub use animator::{Animator, AnimatorOptions, RunSummary};
pub use error::AppError;
pub use sonar_core as core;
