//! Events emitted by the engine when a leg completes.

use serde::{Deserialize, Serialize};

/// Ping lifecycle events for the animator and logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PingEvent {
    /// Outbound wavefront reached the target; phase is now inbound.
    EchoReceived {
        frame: u64,
        time_taken: f64,
        distance: f64,
    },
    /// Inbound wavefront reached the source; one round trip is done.
    RoundTripComplete {
        frame: u64,
        time_taken: f64,
        distance: f64,
        depth_estimate: f64,
    },
}
