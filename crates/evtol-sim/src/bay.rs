//! The charging bay: a bounded pool of interchangeable charger slots.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Shared handle to the fleet's charger slots.
///
/// The bay is a pure counting resource: it tracks how many slots are
/// in use, never which unit holds one. Acquisition queues FIFO (the
/// tokio semaphore's own order), so no unit is starved under bounded
/// contention. Cloning the handle shares the same pool.
#[derive(Debug, Clone)]
pub struct ChargingBay {
    slots: Arc<Semaphore>,
    capacity: usize,
}

/// One held charger slot. Dropping it returns the slot to the pool,
/// so a release without a matching acquire cannot be expressed.
#[derive(Debug)]
pub struct BayPermit {
    _permit: OwnedSemaphorePermit,
}

impl ChargingBay {
    /// Callers validate `capacity >= 1`; a zero-slot bay would strand
    /// every unit on its first charge.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Wait for a free slot and take it. Suspends until one is
    /// available; not interruptible by the simulation stop signal.
    pub async fn acquire(&self) -> BayPermit {
        let permit = self
            .slots
            .clone()
            .acquire_owned()
            .await
            .expect("charging bay semaphore is never closed");
        BayPermit { _permit: permit }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently free.
    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }

    /// Slots currently held.
    pub fn in_use(&self) -> usize {
        self.capacity - self.slots.available_permits()
    }
}
