//! Core types and definitions for the sonar ping simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! positions, wavefront state, configuration, events, frame snapshots,
//! and constants. It contains no simulation logic and no I/O beyond
//! loading a configuration file.

pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

pub use config::{ConfigError, SonarConfig};
