//! Construction-time configuration for the wave engine and animator.
//!
//! Every field has a default, so a JSON config file only needs to name the
//! values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::ClockMode;
use crate::types::Position;

/// Configuration rejected at construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("arena size must be positive and finite, got {0}")]
    InvalidArenaSize(f64),

    #[error("{agent} position ({}, {}) lies outside the arena [0, {arena_size}]", .position.x, .position.y)]
    AgentOutOfBounds {
        agent: &'static str,
        position: Position,
        arena_size: f64,
    },

    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Engine and animator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SonarConfig {
    pub arena_size: f64,
    /// Radius growth per step. Zero or negative never collides.
    pub speed: f64,
    /// Frame budget for one animation run.
    pub total_steps: u64,
    /// Emitter (ship).
    pub source: Position,
    /// Reflector (submarine).
    pub target: Position,
    /// Seconds per frame for `time_taken`.
    pub time_interval_secs: f64,
    /// Seconds per frame for the inbound leg's distance.
    pub distance_interval_secs: f64,
    pub speed_of_sound: f64,
    pub arc_point_count: usize,
    /// Animator pacing between frames.
    pub frame_interval_ms: u64,
    pub clock_mode: ClockMode,
}

impl Default for SonarConfig {
    fn default() -> Self {
        Self::for_arena(DEFAULT_ARENA_SIZE)
    }
}

impl SonarConfig {
    /// Default configuration with agents placed at the fixed edge offsets of an
    /// arena of side `size`.
    pub fn for_arena(size: f64) -> Self {
        let mid = (size / 2.0).floor();
        Self {
            arena_size: size,
            speed: DEFAULT_SPEED,
            total_steps: DEFAULT_TOTAL_STEPS,
            source: Position::new(size - SOURCE_EDGE_OFFSET, mid),
            target: Position::new(TARGET_EDGE_OFFSET, mid),
            time_interval_secs: TIME_INTERVAL_SECS,
            distance_interval_secs: DISTANCE_INTERVAL_SECS,
            speed_of_sound: SPEED_OF_SOUND,
            arc_point_count: ARC_POINT_COUNT,
            frame_interval_ms: FRAME_INTERVAL_MS,
            clock_mode: ClockMode::default(),
        }
    }

    /// Check the invariants the engine relies on.
    ///
    /// A non-positive `speed` passes: it is a valid configuration that simply
    /// never produces a collision.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.arena_size.is_finite() || self.arena_size <= 0.0 {
            return Err(ConfigError::InvalidArenaSize(self.arena_size));
        }
        for (agent, position) in [("source", self.source), ("target", self.target)] {
            if !position.is_finite() || !position.within(self.arena_size) {
                return Err(ConfigError::AgentOutOfBounds {
                    agent,
                    position,
                    arena_size: self.arena_size,
                });
            }
        }
        if !self.speed.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "speed",
                value: self.speed,
            });
        }
        for (name, value) in [
            ("time_interval_secs", self.time_interval_secs),
            ("distance_interval_secs", self.distance_interval_secs),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        if !self.speed_of_sound.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "speed_of_sound",
                value: self.speed_of_sound,
            });
        }
        if self.arc_point_count < 2 {
            return Err(ConfigError::InvalidParameter {
                name: "arc_point_count",
                value: self.arc_point_count as f64,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SonarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Distance between the two agents.
    pub fn separation(&self) -> f64 {
        self.source.range_to(&self.target)
    }

    /// Whether the wavefront can never reach the opposite agent. The radius
    /// saturates at `arena_size`, so agents further apart than that never meet.
    pub fn is_degenerate(&self) -> bool {
        self.speed <= 0.0 || self.separation() > self.arena_size
    }
}
