//! Per-drone mutual exclusion. Loading, transitions and battery refresh hold the drone's
//! lock for their whole read-validate-write sequence.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex as SyncMutex, PoisonError},
};
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = HashMap<i32, Arc<Mutex<()>>>;

/// Registry handing out one async mutex per drone ID.
///
/// Entries exist only while some task holds or waits for the lock, so IDs that are
/// never used again do not accumulate. Cloning the registry shares the underlying map.
#[derive(Clone, Default)]
pub struct DroneLockRegistry {
    locks: Arc<SyncMutex<LockMap>>,
}

impl DroneLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for `drone_id`, waiting for any current holder.
    ///
    /// The lock is released when the returned guard is dropped.
    pub async fn acquire(&self, drone_id: i32) -> DroneLockGuard {
        let lock = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(drone_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        DroneLockGuard {
            drone_id,
            guard: Some(lock.lock_owned().await),
            locks: self.locks.clone(),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Holds one drone's lock; removes the registry entry on drop when nobody else uses it.
pub struct DroneLockGuard {
    drone_id: i32,
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<SyncMutex<LockMap>>,
}

impl Drop for DroneLockGuard {
    fn drop(&mut self) {
        // Release before pruning so the strong count no longer includes this guard.
        self.guard.take();

        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        let unused = locks
            .get(&self.drone_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1);
        if unused {
            locks.remove(&self.drone_id);
        }
    }
}
