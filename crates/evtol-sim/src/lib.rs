//! Concurrent runtime for the eVTOL fleet charging simulation.
//!
//! One tokio task per aircraft runs the flight/charge state machine in
//! [`unit`], all tasks contend for the bounded slot pool in [`bay`],
//! and [`fleet`] orchestrates the run: spawn, sleep out the simulation
//! window, broadcast stop, settle, and aggregate.

pub mod bay;
pub mod fleet;
pub mod unit;

pub use bay::{BayPermit, ChargingBay};
pub use fleet::{FleetParams, FleetReport, FleetSimulation, SimulationError};
pub use unit::{AircraftUnit, Phase};
