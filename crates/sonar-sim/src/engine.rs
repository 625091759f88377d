//! Wave engine: the ping state machine.
//!
//! `WaveEngine` owns the agent positions, the wavefront, the phase, and the
//! round-trip accounting. The caller drives it with one `step` per frame and
//! draws whatever the returned `FrameSnapshot` contains. No I/O, no
//! randomness: the same config and frame sequence always produce the same
//! snapshots.

use log::{debug, info, warn};

use sonar_core::config::{ConfigError, SonarConfig};
use sonar_core::enums::{ClockMode, Phase};
use sonar_core::events::PingEvent;
use sonar_core::state::FrameSnapshot;
use sonar_core::types::{Position, SimClock, Wavefront};

use crate::accounting::Accounting;
use crate::geometry;

/// The wave engine. Owns all simulation state.
#[derive(Debug, Clone)]
pub struct WaveEngine {
    config: SonarConfig,
    phase: Phase,
    wavefront: Wavefront,
    clock: SimClock,
    accounting: Accounting,
}

impl WaveEngine {
    /// Create a new engine, rejecting configurations that violate the arena
    /// invariants.
    pub fn new(config: SonarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.is_degenerate() {
            warn!(
                "ping can never reach the target (speed {}, separation {:.2}, arena {})",
                config.speed,
                config.separation(),
                config.arena_size
            );
        }
        Ok(Self {
            phase: Phase::default(),
            wavefront: Wavefront::at(config.source),
            clock: SimClock::default(),
            accounting: Accounting::default(),
            config,
        })
    }

    /// Return to the initial outbound state, keeping the configuration.
    pub fn reset(&mut self) {
        self.phase = Phase::default();
        self.wavefront = Wavefront::at(self.config.source);
        self.clock = SimClock::default();
        self.accounting = Accounting::default();
    }

    /// Advance the ping by one frame and return what to draw.
    ///
    /// `frame_index` is trusted. It only matters to the time bookkeeping in
    /// `ClockMode::FrameIndex`.
    pub fn step(&mut self, frame_index: u64) -> FrameSnapshot {
        self.clock.advance(self.config.time_interval_secs);
        let (_, receiver) = self.endpoints();

        if self.config.speed > 0.0 && self.wavefront.radius < self.config.arena_size {
            self.wavefront.radius =
                (self.wavefront.radius + self.config.speed).min(self.config.arena_size);
        }

        let mut events = Vec::new();
        if self.wavefront.radius > 0.0 && self.wavefront.reaches(&receiver) {
            events.push(self.complete_leg(frame_index));
        }

        self.build_snapshot(frame_index, events)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn wavefront(&self) -> Wavefront {
        self.wavefront
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn config(&self) -> &SonarConfig {
        &self.config
    }

    pub fn accounting(&self) -> &Accounting {
        &self.accounting
    }

    /// Elapsed seconds of the current round trip, as of the last completed leg.
    pub fn time_taken(&self) -> f64 {
        self.accounting.time_taken
    }

    /// Path length of the current round trip, as of the last completed leg.
    pub fn distance(&self) -> f64 {
        self.accounting.distance
    }

    /// Depth from the most recent completed round trip.
    pub fn depth_estimate(&self) -> Option<f64> {
        self.accounting.depth_estimate
    }

    pub fn round_trips(&self) -> u32 {
        self.accounting.round_trips
    }

    /// `(emitter, receiver)` for the current phase.
    fn endpoints(&self) -> (Position, Position) {
        match self.phase {
            Phase::Outbound => (self.config.source, self.config.target),
            Phase::Inbound => (self.config.target, self.config.source),
        }
    }

    /// Seconds elapsed in the leg that just finished, at `interval_secs` per frame.
    fn leg_secs(&self, frame_index: u64, interval_secs: f64) -> f64 {
        match self.config.clock_mode {
            ClockMode::FrameIndex => frame_index as f64 * interval_secs,
            ClockMode::Accumulating => self.clock.leg_ticks as f64 * interval_secs,
        }
    }

    /// The wavefront reached the receiver: book the leg, flip the phase, and
    /// restart the wavefront at the new emitter.
    fn complete_leg(&mut self, frame_index: u64) -> PingEvent {
        let speed = self.config.speed;
        let leg_secs = self.leg_secs(frame_index, self.config.time_interval_secs);

        let event = match self.phase {
            Phase::Outbound => {
                self.accounting.record_echo(leg_secs, speed);
                debug!(
                    "frame {frame_index}: echo received after {leg_secs:.2}s, distance {:.2}",
                    self.accounting.distance
                );
                PingEvent::EchoReceived {
                    frame: frame_index,
                    time_taken: self.accounting.time_taken,
                    distance: self.accounting.distance,
                }
            }
            Phase::Inbound => {
                let leg_distance_secs =
                    self.leg_secs(frame_index, self.config.distance_interval_secs);
                let depth = self.accounting.record_return(
                    leg_secs,
                    leg_distance_secs,
                    speed,
                    self.config.speed_of_sound,
                );
                info!(
                    "frame {frame_index}: round trip {} complete, time {:.2}s, depth {depth:.2}",
                    self.accounting.round_trips, self.accounting.time_taken
                );
                PingEvent::RoundTripComplete {
                    frame: frame_index,
                    time_taken: self.accounting.time_taken,
                    distance: self.accounting.distance,
                    depth_estimate: depth,
                }
            }
        };

        self.phase = self.phase.flipped();
        let (emitter, _) = self.endpoints();
        self.wavefront = Wavefront::at(emitter);
        self.clock.start_leg();
        event
    }

    fn build_snapshot(&self, frame_index: u64, events: Vec<PingEvent>) -> FrameSnapshot {
        FrameSnapshot {
            frame: frame_index,
            phase: self.phase,
            elapsed_secs: self.clock.elapsed_secs,
            wavefront: self.wavefront,
            arc: geometry::arc_points(
                self.wavefront.center,
                self.wavefront.radius,
                self.phase,
                self.config.arc_point_count,
            ),
            status_text: self.accounting.status_text.clone(),
            time_taken: self.accounting.time_taken,
            distance: self.accounting.distance,
            depth_estimate: self.accounting.depth_estimate,
            round_trips: self.accounting.round_trips,
            events,
        }
    }
}
