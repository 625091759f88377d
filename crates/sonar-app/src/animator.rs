//! Animation loop: steps the engine once per frame for the frame budget.
//!
//! Single-threaded: each snapshot is fully consumed by the sink before the
//! next step. To stop early, stop calling `run` (or give it a smaller budget).

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use sonar_core::config::SonarConfig;
use sonar_sim::WaveEngine;

use crate::error::AppError;
use crate::sink::FrameSink;

/// How the animator drives the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorOptions {
    pub total_steps: u64,
    /// Sleep between frames to match `frame_interval`.
    pub realtime: bool,
    pub frame_interval: Duration,
}

impl AnimatorOptions {
    pub fn from_config(config: &SonarConfig, realtime: bool) -> Self {
        Self {
            total_steps: config.total_steps,
            realtime,
            frame_interval: Duration::from_millis(config.frame_interval_ms),
        }
    }
}

/// Outcome of one animation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed_secs: f64,
    pub round_trips: u32,
    pub last_status: String,
    pub time_taken: f64,
    pub depth_estimate: Option<f64>,
}

pub struct Animator {
    engine: WaveEngine,
    options: AnimatorOptions,
}

impl Animator {
    pub fn new(engine: WaveEngine, options: AnimatorOptions) -> Self {
        Self { engine, options }
    }

    pub fn engine(&self) -> &WaveEngine {
        &self.engine
    }

    /// Step the engine `total_steps` times, feeding every snapshot to `sink`.
    pub fn run(&mut self, sink: &mut impl FrameSink) -> Result<RunSummary, AppError> {
        info!(
            "animating {} frames (realtime: {})",
            self.options.total_steps, self.options.realtime
        );
        let mut summary = RunSummary::default();
        let mut next_frame_time = Instant::now();

        for frame in 0..self.options.total_steps {
            let snapshot = self.engine.step(frame);
            for event in &snapshot.events {
                debug!("{event:?}");
            }
            sink.write_frame(&snapshot)?;

            summary.frames += 1;
            summary.elapsed_secs = snapshot.elapsed_secs;
            summary.round_trips = snapshot.round_trips;
            summary.last_status = snapshot.status_text;
            summary.time_taken = snapshot.time_taken;
            summary.depth_estimate = snapshot.depth_estimate;

            if self.options.realtime {
                next_frame_time = self.pace(next_frame_time);
            }
        }

        sink.finish()?;
        info!(
            "finished {} frames, {} round trip(s)",
            summary.frames, summary.round_trips
        );
        Ok(summary)
    }

    /// Sleep until the next frame is due. Returns the new schedule point.
    fn pace(&self, scheduled: Instant) -> Instant {
        let interval = self.options.frame_interval;
        let next = scheduled + interval;
        let now = Instant::now();
        if next > now {
            thread::sleep(next - now);
            next
        } else if now - next > interval * 2 {
            // Too far behind, reset to avoid a catch-up burst
            now
        } else {
            next
        }
    }
}
