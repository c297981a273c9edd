//! Per-aircraft state machine: fly until the battery is spent, queue
//! for a charger, charge, repeat, until the stop broadcast arrives.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::{sleep, Instant};

use evtol_core::{AircraftProfile, AircraftStats};

use crate::bay::ChargingBay;

/// Where a unit currently is in its cycle. `Docked` is both the
/// initial state and the terminal state after stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Docked,
    Cruising,
    Charging,
}

/// One simulated aircraft. Owned exclusively by its own task once
/// [`run`](Self::run) starts; the orchestrator reads its statistics
/// only from the snapshot the task returns.
#[derive(Debug)]
pub struct AircraftUnit {
    id: u32,
    profile: Arc<AircraftProfile>,
    bay: ChargingBay,
    stop: broadcast::Receiver<()>,
    phase: Phase,
    flight_time: Duration,
    charge_time: Duration,
    stop_seen: bool,
}

impl AircraftUnit {
    pub fn new(
        id: u32,
        profile: Arc<AircraftProfile>,
        bay: ChargingBay,
        stop: broadcast::Receiver<()>,
    ) -> Self {
        Self {
            id,
            profile,
            bay,
            stop,
            phase: Phase::Docked,
            flight_time: Duration::ZERO,
            charge_time: Duration::ZERO,
            stop_seen: false,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run the state machine until the stop broadcast has been
    /// observed, then settle in `Docked` and return the frozen
    /// statistics snapshot.
    ///
    /// Stop is re-evaluated after every timed wait, never mid-phase:
    /// a unit blocked waiting for a charger slot when stop arrives
    /// still acquires the slot, has its charge wait cut short, and
    /// releases the slot before exiting.
    pub async fn run(mut self) -> AircraftStats {
        tracing::debug!(
            unit = self.id,
            manufacturer = %self.profile.manufacturer,
            "entering service"
        );

        while !self.stop_seen {
            self.phase = Phase::Cruising;
            self.fly().await;
            if self.stop_seen {
                break;
            }
            self.phase = Phase::Charging;
            self.charge().await;
        }

        self.phase = Phase::Docked;
        tracing::debug!(
            unit = self.id,
            flight_ms = self.flight_time.as_millis() as u64,
            charge_ms = self.charge_time.as_millis() as u64,
            "docked"
        );
        AircraftStats::from_accumulators(&self.profile, self.flight_time, self.charge_time)
    }

    /// Fly until the battery is spent or stop arrives, crediting the
    /// actual elapsed time either way.
    async fn fly(&mut self) {
        let elapsed = self
            .timed_wait(self.profile.flight_duration_per_charge())
            .await;
        self.flight_time += elapsed;
    }

    /// Queue for a slot, charge, release. Queuing time counts as
    /// charge time: it is real dwell time at the bay.
    async fn charge(&mut self) {
        let queued_at = Instant::now();
        let permit = self.bay.acquire().await;
        let queued_for = queued_at.elapsed();

        let charging_for = self.timed_wait(self.profile.charge_duration_wall()).await;
        drop(permit);

        self.charge_time += queued_for + charging_for;
    }

    /// One interruptible sleep bounded by `nominal`. Returns the
    /// actual elapsed time, which is shorter than `nominal` when the
    /// stop broadcast cuts the wait short.
    async fn timed_wait(&mut self, nominal: Duration) -> Duration {
        let start = Instant::now();
        tokio::select! {
            _ = sleep(nominal) => {}
            // A closed channel (orchestrator gone) also means stop.
            _ = self.stop.recv() => {
                self.stop_seen = true;
            }
        }
        start.elapsed()
    }
}
