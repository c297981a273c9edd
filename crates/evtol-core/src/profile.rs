//! Manufacturer profiles and the fleet roster.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::simtime::sim_hours_to_wall;

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("profile '{0}': cruise speed must be greater than zero")]
    ZeroCruiseSpeed(String),
    #[error("profile '{0}': battery capacity must be greater than zero")]
    ZeroBatteryCapacity(String),
    #[error("profile '{0}': energy use per mile must be a positive, finite number")]
    InvalidEnergyUse(String),
    #[error("profile '{0}': charge duration must be a non-negative, finite number of hours")]
    InvalidChargeDuration(String),
    #[error("profile '{0}': fault rate must be a non-negative, finite number per hour")]
    InvalidFaultRate(String),
    #[error("roster must contain at least one profile")]
    EmptyRoster,
}

/// Immutable per-manufacturer performance specification.
///
/// One profile instance is shared read-only (via `Arc`) by every unit
/// built from it. All fields are fixed at construction; the flight and
/// charge durations are derived once and never recomputed.
#[derive(Debug, Clone, Serialize)]
pub struct AircraftProfile {
    pub manufacturer: String,
    pub cruise_speed_mph: u32,
    pub battery_capacity_kwh: u32,
    pub charge_duration_hours: f64,
    pub energy_per_mile_kwh: f64,
    pub passenger_capacity: u32,
    pub fault_rate_per_hour: f64,
    /// Wall-clock length of one full-battery flight phase.
    flight_duration_per_charge: Duration,
    /// Wall-clock length of one full charge phase.
    charge_duration_wall: Duration,
}

impl AircraftProfile {
    pub fn new(
        manufacturer: impl Into<String>,
        cruise_speed_mph: u32,
        battery_capacity_kwh: u32,
        charge_duration_hours: f64,
        energy_per_mile_kwh: f64,
        passenger_capacity: u32,
        fault_rate_per_hour: f64,
    ) -> Result<Self, ProfileError> {
        let manufacturer = manufacturer.into();
        if cruise_speed_mph == 0 {
            return Err(ProfileError::ZeroCruiseSpeed(manufacturer));
        }
        if battery_capacity_kwh == 0 {
            return Err(ProfileError::ZeroBatteryCapacity(manufacturer));
        }
        if !(energy_per_mile_kwh.is_finite() && energy_per_mile_kwh > 0.0) {
            return Err(ProfileError::InvalidEnergyUse(manufacturer));
        }
        if !(charge_duration_hours.is_finite() && charge_duration_hours >= 0.0) {
            return Err(ProfileError::InvalidChargeDuration(manufacturer));
        }
        if !(fault_rate_per_hour.is_finite() && fault_rate_per_hour >= 0.0) {
            return Err(ProfileError::InvalidFaultRate(manufacturer));
        }

        let miles_per_charge = battery_capacity_kwh as f64 / energy_per_mile_kwh;
        let flight_hours_per_charge = miles_per_charge / cruise_speed_mph as f64;

        Ok(Self {
            manufacturer,
            cruise_speed_mph,
            battery_capacity_kwh,
            charge_duration_hours,
            energy_per_mile_kwh,
            passenger_capacity,
            fault_rate_per_hour,
            flight_duration_per_charge: sim_hours_to_wall(flight_hours_per_charge),
            charge_duration_wall: sim_hours_to_wall(charge_duration_hours),
        })
    }

    /// Wall-clock duration of one flight phase (one full battery).
    pub fn flight_duration_per_charge(&self) -> Duration {
        self.flight_duration_per_charge
    }

    /// Wall-clock duration of one charge phase, excluding queuing.
    pub fn charge_duration_wall(&self) -> Duration {
        self.charge_duration_wall
    }
}

/// The fleet's roster of available profiles. Non-empty by construction.
#[derive(Debug, Clone)]
pub struct Roster {
    profiles: Vec<Arc<AircraftProfile>>,
}

impl Roster {
    pub fn new(profiles: Vec<AircraftProfile>) -> Result<Self, ProfileError> {
        if profiles.is_empty() {
            return Err(ProfileError::EmptyRoster);
        }
        Ok(Self {
            profiles: profiles.into_iter().map(Arc::new).collect(),
        })
    }

    /// Pick one profile uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Arc<AircraftProfile> {
        let index = rng.random_range(0..self.profiles.len());
        self.profiles[index].clone()
    }

    pub fn profiles(&self) -> &[Arc<AircraftProfile>] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
