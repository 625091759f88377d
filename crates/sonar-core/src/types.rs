//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in arena space.
/// x = primary (vertical) axis, y = secondary axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// The expanding circular pulse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Wavefront {
    /// Always exactly the current emitter's position.
    pub center: Position,
    pub radius: f64,
}

/// One sampled arc point in plot coordinates (axes already swapped).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Number of `step` calls since construction or reset.
    pub frame: u64,
    /// Accumulated time in seconds at the time interval.
    pub elapsed_secs: f64,
    /// `step` calls made during the current leg.
    pub leg_ticks: u64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.to_dvec2().distance(other.to_dvec2())
    }

    /// Whether both coordinates lie in `[0, size]`.
    pub fn within(&self, size: f64) -> bool {
        (0.0..=size).contains(&self.x) && (0.0..=size).contains(&self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl Wavefront {
    /// A zero-radius wavefront at `center`.
    pub fn at(center: Position) -> Self {
        Self {
            center,
            radius: 0.0,
        }
    }

    /// Whether the wavefront has reached `point`.
    pub fn reaches(&self, point: &Position) -> bool {
        self.center.range_to(point) <= self.radius
    }
}

impl SimClock {
    /// Advance by one step of `interval_secs`.
    pub fn advance(&mut self, interval_secs: f64) {
        self.frame += 1;
        self.leg_ticks += 1;
        self.elapsed_secs += interval_secs;
    }

    /// Start counting a new leg.
    pub fn start_leg(&mut self) {
        self.leg_ticks = 0;
    }
}
