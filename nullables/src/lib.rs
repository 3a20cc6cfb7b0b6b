//! Nullable infrastructure for deterministic testing.
//!
//! External collaborators (the authentication layer that produces caller
//! identities, the durable store that holds snapshots) are abstracted away.
//! This crate provides test-friendly stand-ins that:
//! - Return deterministic values
//! - Can be inspected programmatically
//! - Never touch the filesystem
//!
//! Usage: swap real implementations for nullables in tests.

pub mod identity;
pub mod store;

pub use identity::NullIdentities;
pub use store::NullSnapshotStore;
