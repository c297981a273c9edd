//! Per-unit statistics snapshots and the per-company aggregation fold.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::profile::AircraftProfile;
use crate::simtime::sim_hours;

/// Statistics snapshot for one aircraft, produced once after its loop
/// has exited. Immutable from then on.
#[derive(Debug, Clone, Serialize)]
pub struct AircraftStats {
    pub manufacturer: String,
    pub unit_count: u32,
    pub flight_hours: f64,
    pub charge_hours: f64,
    pub fault_count: u64,
    pub distance_miles: f64,
    pub passenger_miles: f64,
}

impl AircraftStats {
    /// Build a snapshot from a unit's raw time accumulators.
    ///
    /// The derived metrics all use simulated hours: faults are
    /// `ceil(rate * hours)`, distance is `hours * cruise speed`, and
    /// passenger-miles is `distance * seats`.
    pub fn from_accumulators(
        profile: &AircraftProfile,
        flight_time: Duration,
        charge_time: Duration,
    ) -> Self {
        let flight_hours = sim_hours(flight_time);
        let distance_miles = flight_hours * profile.cruise_speed_mph as f64;
        Self {
            manufacturer: profile.manufacturer.clone(),
            unit_count: 1,
            flight_hours,
            charge_hours: sim_hours(charge_time),
            fault_count: (profile.fault_rate_per_hour * flight_hours).ceil() as u64,
            distance_miles,
            passenger_miles: profile.passenger_capacity as f64 * distance_miles,
        }
    }
}

/// Aggregate totals for one manufacturer across the whole fleet.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyStats {
    pub manufacturer: String,
    pub unit_count: u32,
    pub flight_hours: f64,
    pub charge_hours: f64,
    pub fault_count: u64,
    pub distance_miles: f64,
    pub passenger_miles: f64,
}

impl CompanyStats {
    fn fold(&mut self, unit: &AircraftStats) {
        self.unit_count += unit.unit_count;
        self.flight_hours += unit.flight_hours;
        self.charge_hours += unit.charge_hours;
        self.fault_count += unit.fault_count;
        self.distance_miles += unit.distance_miles;
        self.passenger_miles += unit.passenger_miles;
    }
}

impl From<&AircraftStats> for CompanyStats {
    fn from(unit: &AircraftStats) -> Self {
        Self {
            manufacturer: unit.manufacturer.clone(),
            unit_count: unit.unit_count,
            flight_hours: unit.flight_hours,
            charge_hours: unit.charge_hours,
            fault_count: unit.fault_count,
            distance_miles: unit.distance_miles,
            passenger_miles: unit.passenger_miles,
        }
    }
}

/// Group per-unit snapshots by manufacturer and sum each group.
///
/// Pure fold, sums only. Any averaging for display belongs to the
/// reporting layer, not here. Output order is alphabetical by
/// manufacturer so reports are deterministic.
pub fn aggregate_by_company(units: &[AircraftStats]) -> Vec<CompanyStats> {
    let mut groups: BTreeMap<&str, CompanyStats> = BTreeMap::new();
    for unit in units {
        groups
            .entry(unit.manufacturer.as_str())
            .and_modify(|company| company.fold(unit))
            .or_insert_with(|| CompanyStats::from(unit));
    }
    groups.into_values().collect()
}
