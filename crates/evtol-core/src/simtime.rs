//! Simulated-time conventions.
//!
//! The simulation compresses time: one simulated hour of flight or
//! charging elapses in one wall-clock second. Every conversion between
//! wall durations and simulated hours goes through this module so that
//! the derived metrics (faults, distance, passenger-miles) all see the
//! same unit.

use std::time::Duration;

/// Wall-clock milliseconds that represent one simulated hour.
pub const WALL_MILLIS_PER_SIM_HOUR: u64 = 1000;

/// Convert a measured wall-clock duration into simulated hours.
pub fn sim_hours(wall: Duration) -> f64 {
    wall.as_secs_f64() * 1000.0 / WALL_MILLIS_PER_SIM_HOUR as f64
}

/// Convert a simulated-hours figure into the wall-clock duration it
/// occupies, rounded to the nearest millisecond.
pub fn sim_hours_to_wall(hours: f64) -> Duration {
    let millis = (hours * WALL_MILLIS_PER_SIM_HOUR as f64).round();
    Duration::from_millis(millis as u64)
}
