//! Nullable store: in-memory snapshot storage for testing.

use proledger_store::{RegistryState, SnapshotStore, StoreError};
use std::sync::Mutex;

/// Keeps the last saved snapshot in memory, encoded exactly as a real
/// backend would write it.
pub struct NullSnapshotStore {
    snapshot: Mutex<Option<Vec<u8>>>,
    saves: Mutex<u64>,
}

impl NullSnapshotStore {
    pub fn new() -> Self {
        Self {
            snapshot: Mutex::new(None),
            saves: Mutex::new(0),
        }
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> u64 {
        *self.saves.lock().unwrap()
    }
}

impl Default for NullSnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for NullSnapshotStore {
    fn load(&self) -> Result<Option<RegistryState>, StoreError> {
        self.snapshot
            .lock()
            .unwrap()
            .as_deref()
            .map(RegistryState::from_bytes)
            .transpose()
    }

    fn save(&self, state: &RegistryState) -> Result<(), StoreError> {
        let bytes = state.to_bytes()?;
        *self.snapshot.lock().unwrap() = Some(bytes);
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
