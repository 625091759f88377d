//! Frame snapshot: everything the animator needs to draw one frame.

use serde::{Deserialize, Serialize};

use crate::enums::Phase;
use crate::events::PingEvent;
use crate::types::{PlotPoint, Wavefront};

/// Result of a single engine step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Frame index supplied by the caller.
    pub frame: u64,
    /// Phase after this step (already flipped if a collision occurred).
    pub phase: Phase,
    /// Seconds elapsed since construction or reset, at the time interval.
    pub elapsed_secs: f64,
    pub wavefront: Wavefront,
    /// Half-circle samples to draw, in plot coordinates.
    pub arc: Vec<PlotPoint>,
    /// Timer/depth label. Empty until the first round trip completes.
    pub status_text: String,
    pub time_taken: f64,
    pub distance: f64,
    /// Set once at least one round trip has completed.
    pub depth_estimate: Option<f64>,
    pub round_trips: u32,
    /// Events raised during this step.
    pub events: Vec<PingEvent>,
}

impl FrameSnapshot {
    /// Whether the phase flipped during this step.
    pub fn collided(&self) -> bool {
        !self.events.is_empty()
    }
}
