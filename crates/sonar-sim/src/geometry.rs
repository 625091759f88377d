//! Arc-point sampling for rendering the wavefront.
//!
//! Pure functions; nothing here touches engine state. The plot uses a
//! vertical arena orientation, so the arena's primary axis (`x`) is drawn on
//! the plot's vertical axis and the secondary axis (`y`) on the horizontal.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

use sonar_core::enums::Phase;
use sonar_core::types::{PlotPoint, Position};

/// Angular range `(start, end)` of the half-circle drawn for `phase`.
///
/// Outbound pings travel from the source down toward the target, so the
/// lower half `[π, 2π]` is drawn. Inbound pings travel back up: `[0, π]`.
pub fn arc_span(phase: Phase) -> (f64, f64) {
    match phase {
        Phase::Outbound => (PI, TAU),
        Phase::Inbound => (0.0, PI),
    }
}

/// Sample `count` evenly spaced points (endpoints inclusive) along the
/// half-circle of `radius` around `center`, oriented for `phase`.
pub fn arc_points(center: Position, radius: f64, phase: Phase, count: usize) -> Vec<PlotPoint> {
    let (start, end) = arc_span(phase);
    let span = end - start;
    let origin = DVec2::new(center.y, center.x);

    (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1).max(1) as f64;
            let p = origin + DVec2::from_angle(start + t * span) * radius;
            PlotPoint { x: p.x, y: p.y }
        })
        .collect()
}
