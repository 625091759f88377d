//! Simulation constants and tuning parameters.

// --- Arena ---

/// Default side length of the square arena (abstract distance units).
pub const DEFAULT_ARENA_SIZE: f64 = 100.0;

/// Source (ship) sits this far below the far edge along the primary axis.
pub const SOURCE_EDGE_OFFSET: f64 = 22.0;

/// Target (submarine) sits this far above the near edge along the primary axis.
pub const TARGET_EDGE_OFFSET: f64 = 10.0;

// --- Wave ---

/// Default wavefront radius growth per step.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Number of samples in a rendered half-circle.
pub const ARC_POINT_COUNT: usize = 100;

// --- Timing ---

/// Default frame budget for one animation run.
pub const DEFAULT_TOTAL_STEPS: u64 = 500;

/// Seconds per frame used when accumulating `time_taken`.
pub const TIME_INTERVAL_SECS: f64 = 0.06;

/// Seconds per frame used when accumulating the inbound leg's distance.
pub const DISTANCE_INTERVAL_SECS: f64 = 0.05;

/// Wall-clock pacing between animation frames (milliseconds).
pub const FRAME_INTERVAL_MS: u64 = 50;

// --- Depth estimate ---

/// Speed-of-sound constant used by the depth formula (abstract units).
pub const SPEED_OF_SOUND: f64 = 3315.0;

/// Seconds per hour.
pub const SECS_PER_HOUR: f64 = 3600.0;
