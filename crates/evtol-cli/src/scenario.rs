//! Scenario file parsing.
//!
//! A scenario is a JSON document with a `companies` array and three
//! scalars: how many units to deploy, how many charger slots exist,
//! and how long the simulation window stays open.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use evtol_core::{AircraftProfile, ProfileError, Roster};
use evtol_sim::FleetParams;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("scenario file is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub companies: Vec<CompanyEntry>,
    pub evtols_count: u32,
    pub max_chargers: usize,
    /// Simulation window in wall-clock minutes.
    pub simulation_minutes: f64,
}

/// One manufacturer entry, with the scenario file's key spelling.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CompanyEntry {
    pub company: String,
    pub cruise_speed: u32,
    pub battery_capacity: u32,
    pub time_to_charge: f64,
    pub energy_use_at_cruise: f64,
    pub passenger_count: u32,
    pub prob_faults_per_hour: f64,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Validate every company entry into a profile roster.
    pub fn roster(&self) -> Result<Roster, ScenarioError> {
        let profiles = self
            .companies
            .iter()
            .map(|entry| {
                AircraftProfile::new(
                    entry.company.clone(),
                    entry.cruise_speed,
                    entry.battery_capacity,
                    entry.time_to_charge,
                    entry.energy_use_at_cruise,
                    entry.passenger_count,
                    entry.prob_faults_per_hour,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Roster::new(profiles)?)
    }

    pub fn params(&self) -> FleetParams {
        FleetParams {
            unit_count: self.evtols_count,
            charger_slots: self.max_chargers,
            duration_minutes: self.simulation_minutes,
        }
    }
}
