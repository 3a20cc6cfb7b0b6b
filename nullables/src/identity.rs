//! Nullable identities: deterministic caller identities for testing.

use proledger_types::Identity;
use std::cell::Cell;

/// Hands out distinct, reproducible identities.
///
/// The n-th identity (1-based) carries `n` big-endian in its last eight bytes.
pub struct NullIdentities {
    issued: Cell<u64>,
}

impl NullIdentities {
    pub fn new() -> Self {
        Self {
            issued: Cell::new(0),
        }
    }

    /// The next unused identity.
    pub fn next(&self) -> Identity {
        let n = self.issued.get() + 1;
        self.issued.set(n);
        Self::nth(n)
    }

    /// The identity `next` returns on its `n`-th call.
    pub fn nth(n: u64) -> Identity {
        let mut bytes = [0u8; 20];
        bytes[0] = 0xee;
        bytes[12..].copy_from_slice(&n.to_be_bytes());
        Identity::new(bytes)
    }
}

impl Default for NullIdentities {
    fn default() -> Self {
        Self::new()
    }
}
