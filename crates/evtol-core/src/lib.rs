//! Core domain model for the eVTOL fleet charging simulation.
//!
//! This crate holds the pure parts of the system: manufacturer
//! profiles, the simulated-time unit conventions, per-unit statistics
//! snapshots, and the per-company aggregation fold. Nothing in here is
//! async; the concurrent runtime lives in `evtol-sim`.

pub mod profile;
pub mod simtime;
pub mod stats;

pub use profile::{AircraftProfile, ProfileError, Roster};
pub use simtime::{sim_hours, sim_hours_to_wall, WALL_MILLIS_PER_SIM_HOUR};
pub use stats::{aggregate_by_company, AircraftStats, CompanyStats};
