//! Fleet orchestration: deploy units, hold the simulation window open,
//! broadcast stop, wait for the fleet to settle, aggregate.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};

use evtol_core::{aggregate_by_company, AircraftStats, CompanyStats, Roster};

use crate::bay::ChargingBay;
use crate::unit::AircraftUnit;

/// How long the orchestrator waits for units to settle after stop.
/// Stop cuts every timed wait short, so settling normally takes
/// milliseconds; a unit that misses this window is a stuck task, and
/// the run reports it instead of hanging.
const SETTLE_GRACE: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("fleet must contain at least one unit")]
    NoUnits,
    #[error("at least one charger slot is required; zero slots would strand every unit")]
    NoChargerSlots,
    #[error("simulation duration must be a finite, non-negative number of minutes (got {0})")]
    InvalidDuration(f64),
    #[error("unit {id} task failed")]
    UnitFailed {
        id: u32,
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("unit(s) {ids:?} did not settle within the grace period")]
    Straggler { ids: Vec<u32> },
}

/// Scalar inputs for one run. The roster comes separately.
#[derive(Debug, Clone, Copy)]
pub struct FleetParams {
    pub unit_count: u32,
    pub charger_slots: usize,
    pub duration_minutes: f64,
}

/// Outcome of one run: every unit's frozen snapshot plus the
/// per-company totals, stamped with the run's wall-clock bounds.
#[derive(Debug, Clone, Serialize)]
pub struct FleetReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub per_unit: Vec<AircraftStats>,
    pub by_company: Vec<CompanyStats>,
}

/// One configured simulation run.
#[derive(Debug)]
pub struct FleetSimulation {
    roster: Roster,
    params: FleetParams,
}

impl FleetSimulation {
    /// Validate the configuration up front: a zero-slot bay or an
    /// empty fleet would never make progress, so both are rejected
    /// here rather than discovered as a hang.
    pub fn new(roster: Roster, params: FleetParams) -> Result<Self, SimulationError> {
        if params.unit_count == 0 {
            return Err(SimulationError::NoUnits);
        }
        if params.charger_slots == 0 {
            return Err(SimulationError::NoChargerSlots);
        }
        if !(params.duration_minutes.is_finite() && params.duration_minutes >= 0.0) {
            return Err(SimulationError::InvalidDuration(params.duration_minutes));
        }
        Ok(Self { roster, params })
    }

    /// Run the simulation to completion and return the report.
    pub async fn run(self) -> Result<FleetReport, SimulationError> {
        let started_at = Utc::now();
        let bay = ChargingBay::new(self.params.charger_slots);
        let (stop_tx, _) = broadcast::channel(1);

        let handles = self.deploy(&bay, &stop_tx);
        tracing::info!(
            units = self.params.unit_count,
            charger_slots = self.params.charger_slots,
            minutes = self.params.duration_minutes,
            "simulation window open"
        );

        sleep(Duration::from_secs_f64(self.params.duration_minutes * 60.0)).await;

        tracing::info!("simulation window closed, broadcasting stop");
        if stop_tx.send(()).is_err() {
            tracing::warn!("no units were listening for the stop broadcast");
        }

        let per_unit = settle(handles).await?;
        if bay.in_use() != 0 {
            tracing::warn!(held = bay.in_use(), "charger slots still held after settle");
        }

        let by_company = aggregate_by_company(&per_unit);
        Ok(FleetReport {
            started_at,
            finished_at: Utc::now(),
            per_unit,
            by_company,
        })
    }

    /// Spawn one task per unit, each with its own stop receiver and a
    /// profile picked uniformly at random. Returns without blocking on
    /// any unit's progress.
    fn deploy(
        &self,
        bay: &ChargingBay,
        stop_tx: &broadcast::Sender<()>,
    ) -> Vec<(u32, JoinHandle<AircraftStats>)> {
        let mut rng = rand::rng();
        (0..self.params.unit_count)
            .map(|id| {
                let profile = self.roster.pick(&mut rng);
                tracing::info!(unit = id, manufacturer = %profile.manufacturer, "deploying unit");
                let unit = AircraftUnit::new(id, profile, bay.clone(), stop_tx.subscribe());
                (id, tokio::spawn(unit.run()))
            })
            .collect()
    }
}

/// Join every unit task, bounded by the settle grace. A unit's
/// accumulators are only read from the snapshot its task returns, so
/// nothing is read while a task might still be running.
///
/// A unit that misses the grace window is aborted and recorded; every
/// remaining handle is still drained before the run fails, so no task
/// is left running behind a returned error. The report requires one
/// snapshot per unit, so any straggler fails the run.
async fn settle(
    handles: Vec<(u32, JoinHandle<AircraftStats>)>,
) -> Result<Vec<AircraftStats>, SimulationError> {
    let mut per_unit = Vec::with_capacity(handles.len());
    let mut stragglers = Vec::new();
    for (id, mut handle) in handles {
        match timeout(SETTLE_GRACE, &mut handle).await {
            Ok(Ok(stats)) => per_unit.push(stats),
            Ok(Err(source)) => return Err(SimulationError::UnitFailed { id, source }),
            Err(_) => {
                tracing::warn!(unit = id, "unit did not settle within grace period, aborting");
                handle.abort();
                stragglers.push(id);
            }
        }
    }
    if !stragglers.is_empty() {
        return Err(SimulationError::Straggler { ids: stragglers });
    }
    Ok(per_unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future;

    fn parked_stats() -> AircraftStats {
        AircraftStats {
            manufacturer: "Alpha".to_string(),
            unit_count: 1,
            flight_hours: 1.0,
            charge_hours: 0.5,
            fault_count: 1,
            distance_miles: 120.0,
            passenger_miles: 480.0,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stuck_unit_fails_run_as_straggler() {
        let settled = tokio::spawn(async { parked_stats() });
        let stuck = tokio::spawn(async { future::pending::<AircraftStats>().await });

        let err = settle(vec![(0, settled), (1, stuck)]).await.unwrap_err();
        match err {
            SimulationError::Straggler { ids } => assert_eq!(ids, vec![1]),
            other => panic!("expected straggler error, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_units_settled_yields_one_snapshot_each() {
        let handles = (0..3)
            .map(|id| (id, tokio::spawn(async { parked_stats() })))
            .collect();
        let per_unit = settle(handles).await.unwrap();
        assert_eq!(per_unit.len(), 3);
    }
}
