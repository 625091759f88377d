//! Time, distance, and depth bookkeeping across a round trip.

use serde::{Deserialize, Serialize};

use sonar_core::constants::SECS_PER_HOUR;

/// Depth derived from round-trip time: half the one-way distance sound
/// covers in `time_secs` at `speed_of_sound` units per hour.
pub fn depth_from_time(time_secs: f64, speed_of_sound: f64) -> f64 {
    (time_secs / SECS_PER_HOUR * speed_of_sound) / 2.0
}

/// Label shown by the animator after a round trip.
pub fn format_status(time_taken: f64, depth_estimate: f64) -> String {
    format!("Time taken: {time_taken:.2} seconds\nDepth: {depth_estimate:.2} miles")
}

/// Running totals for the current round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accounting {
    pub time_taken: f64,
    pub distance: f64,
    /// Set after the first completed round trip; kept until the next one.
    pub depth_estimate: Option<f64>,
    pub round_trips: u32,
    pub status_text: String,
}

impl Accounting {
    /// Outbound leg done. Overwrites the totals from any previous round trip.
    pub fn record_echo(&mut self, leg_secs: f64, speed: f64) {
        self.time_taken = leg_secs;
        self.distance = speed * leg_secs;
    }

    /// Inbound leg done. Time and distance accrue at their own intervals,
    /// hence the two separate durations. Returns the new depth estimate.
    pub fn record_return(
        &mut self,
        leg_secs: f64,
        leg_distance_secs: f64,
        speed: f64,
        speed_of_sound: f64,
    ) -> f64 {
        self.time_taken += leg_secs;
        self.distance += speed * leg_distance_secs;
        let depth = depth_from_time(self.time_taken, speed_of_sound);
        self.depth_estimate = Some(depth);
        self.round_trips += 1;
        self.status_text = format_status(self.time_taken, depth);
        depth
    }
}
