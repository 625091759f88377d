//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Direction of travel of the current ping leg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Wavefront centered at the source, expanding toward the target.
    #[default]
    Outbound,
    /// Wavefront centered at the target, expanding back toward the source.
    Inbound,
}

impl Phase {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Phase::Outbound => Phase::Inbound,
            Phase::Inbound => Phase::Outbound,
        }
    }
}

/// How elapsed time is derived when a leg completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockMode {
    /// Multiply the caller-supplied frame index by the interval.
    /// Reproduces the legacy time formula; does not track true elapsed time.
    FrameIndex,
    /// Count `step` calls within the leg and multiply by the interval.
    #[default]
    Accumulating,
}
