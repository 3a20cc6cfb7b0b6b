//! Snapshot storage trait.

use crate::{RegistryState, StoreError};

/// Durable home for the registry state.
///
/// Backends persist whole snapshots, so a call is either fully visible after
/// `save` or not at all.
pub trait SnapshotStore {
    /// Load the last saved state, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<RegistryState>, StoreError>;

    fn save(&self, state: &RegistryState) -> Result<(), StoreError>;

    /// Load the saved state, falling back to an empty registry.
    fn load_or_default(&self) -> Result<RegistryState, StoreError> {
        Ok(self.load()?.unwrap_or_default())
    }
}
