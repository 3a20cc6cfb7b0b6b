//! Record arenas and persisted state for the proledger registry.
//!
//! The registry engine mutates a [`RegistryState`] in memory. Durable storage
//! is a host concern: backends implement [`SnapshotStore`] and persist the
//! whole state as one encoded snapshot, so every committed call is applied
//! all-or-nothing.

pub mod arena;
pub mod error;
pub mod records;
pub mod slots;
pub mod snapshot;
pub mod state;

pub use arena::{Arena, ArenaId};
pub use error::StoreError;
pub use records::{Certificate, Endorsement, Experience, Member, Organization, Skill};
pub use slots::{Slot, SlotList};
pub use snapshot::SnapshotStore;
pub use state::RegistryState;
